use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::{category::{self, CategoryInput}, product};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Category operations as the endpoints see them.
/// Holds the product repository as well for the products-in-category listing.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { categories, products }
    }

    pub async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.categories.get_all_categories().await
    }

    pub async fn get(&self, id: i32) -> Result<category::Model, ServiceError> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("category"))
    }

    /// Products whose `category_id` equals `id`; an unknown category yields an empty list.
    pub async fn products(&self, id: i32) -> Result<Vec<product::Model>, ServiceError> {
        self.products.list_by_category_id(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        let created = self.categories.create(input).await?;
        info!(category_id = created.category_id, "category_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: CategoryInput) -> Result<(), ServiceError> {
        let affected = self.categories.update(id, input).await?;
        debug!(affected, "category_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let affected = self.categories.delete(id).await?;
        debug!(affected, "category_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::repository::mock::MockCategoryRepository;
    use crate::product::repository::mock::MockProductRepository;
    use models::product::ProductInput;
    use rust_decimal::Decimal;

    fn service() -> (CategoryService, Arc<MockCategoryRepository>, Arc<MockProductRepository>) {
        let cats = Arc::new(MockCategoryRepository::default());
        let prods = Arc::new(MockProductRepository::default());
        (CategoryService::new(cats.clone(), prods.clone()), cats, prods)
    }

    fn tools() -> CategoryInput {
        CategoryInput { name: "Tools".into(), description: Some("Hand tools".into()) }
    }

    #[tokio::test]
    async fn get_returns_requested_id_or_not_found() {
        let (svc, _, _) = service();
        let created = svc.create(tools()).await.unwrap();
        assert_eq!(svc.get(created.category_id).await.unwrap().category_id, created.category_id);
        assert!(matches!(svc.get(created.category_id + 1).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_silent() {
        let (svc, _, _) = service();
        svc.create(tools()).await.unwrap();
        svc.delete(404).await.unwrap();
        svc.update(404, tools()).await.unwrap();
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn products_lists_only_matching_category() {
        let (svc, _, prods) = service();
        for (name, cat) in [("Hammer", 1), ("Saw", 1), ("Rake", 2)] {
            prods
                .create(ProductInput {
                    name: name.into(),
                    price: Decimal::new(999, 2),
                    category_id: cat,
                    description: None,
                    color: None,
                    image_url: None,
                    stock: 1,
                    featured: false,
                })
                .await
                .unwrap();
        }
        let names: Vec<String> = svc.products(1).await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Hammer", "Saw"]);
        assert!(svc.products(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_propagates_store_failure() {
        let (svc, cats, _) = service();
        cats.set_failing(true);
        assert!(matches!(svc.list().await, Err(ServiceError::Db(_))));
    }
}
