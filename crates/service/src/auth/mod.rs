//! Auth module: bearer-token claims, errors, and the token service.
//!
//! Tokens are HS256 JWTs carrying a role; mutation endpoints accept only the admin role.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::TokenService;
