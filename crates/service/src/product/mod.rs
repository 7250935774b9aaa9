//! Products: optional-filter search, repository over the `products` table, and service.

pub mod filter;
pub mod repository;
pub mod service;
