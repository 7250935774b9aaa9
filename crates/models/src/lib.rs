//! Entities for the storefront catalog and the pooled connection they are read through.
//!
//! Each entity is a fixed column-to-field projection: a renamed or missing
//! column surfaces as a `DbErr` when rows are read, not at startup.

pub mod errors;
pub mod db;
pub mod category;
pub mod product;
