//! Categories: repository over the `categories` table and the service the endpoints call.

pub mod repository;
pub mod service;
