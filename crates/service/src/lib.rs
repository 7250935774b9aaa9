//! Service layer for the storefront catalog.
//! - Repositories translate each operation into a single statement against the store.
//! - Services apply the not-found policy on top of the repositories.
//! - Store failures travel as `ServiceError` values, logged once where they occur.

pub mod errors;
pub mod auth;
pub mod category;
pub mod product;
#[cfg(test)]
pub mod test_support;

pub use category::{repository::{CategoryRepository, SeaOrmCategoryRepository}, service::CategoryService};
pub use product::{filter::ProductFilter, repository::{ProductRepository, SeaOrmProductRepository}, service::ProductService};
