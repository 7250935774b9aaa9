use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    auth::TokenService, CategoryRepository, CategoryService, ProductRepository, ProductService,
    SeaOrmCategoryRepository, SeaOrmProductRepository,
};

/// Shared per-process state handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    pub tokens: TokenService,
    pub protect_category_writes: bool,
}

impl ServerState {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        tokens: TokenService,
        protect_category_writes: bool,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(category_repo, Arc::clone(&product_repo))),
            products: Arc::new(ProductService::new(product_repo)),
            tokens,
            protect_category_writes,
        }
    }

    /// Wire SeaORM repositories over one pooled connection.
    pub fn from_db(db: DatabaseConnection, auth: &configs::AuthConfig) -> Self {
        Self::new(
            Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            Arc::new(SeaOrmProductRepository::new(db)),
            TokenService::new(auth.jwt_secret.clone(), auth.admin_role.clone()),
            auth.protect_category_writes,
        )
    }
}
