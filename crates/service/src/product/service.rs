use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::product::{self, ProductInput};

use crate::errors::ServiceError;
use crate::product::{filter::ProductFilter, repository::ProductRepository};

/// Application service encapsulating the product not-found policy.
/// `get` and `delete` report a missing row; `update` does not.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn search(&self, filter: ProductFilter) -> Result<Vec<product::Model>, ServiceError> {
        let found = self.repo.search(&filter).await?;
        debug!(count = found.len(), "product_search");
        Ok(found)
    }

    pub async fn get(&self, id: i32) -> Result<product::Model, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))
    }

    #[instrument(skip(self, input), fields(name = %input.name, category_id = input.category_id))]
    pub async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(product_id = created.product_id, "product_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ProductInput) -> Result<(), ServiceError> {
        let affected = self.repo.update(id, input).await?;
        debug!(affected, "product_updated");
        Ok(())
    }

    /// Checks existence first so a missing id is reported rather than ignored.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo.delete(id).await?;
        info!(product_id = id, "product_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::repository::mock::MockProductRepository;
    use rust_decimal::Decimal;

    fn chair() -> ProductInput {
        ProductInput {
            name: "Chair".into(),
            price: Decimal::new(4999, 2),
            category_id: 1,
            description: None,
            color: Some("red".into()),
            image_url: None,
            stock: 5,
            featured: false,
        }
    }

    fn service() -> (ProductService, Arc<MockProductRepository>) {
        let repo = Arc::new(MockProductRepository::default());
        (ProductService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_then_get_by_returned_id() {
        let (svc, _) = service();
        let created = svc.create(chair()).await.unwrap();
        let got = svc.get(created.product_id).await.unwrap();
        assert_eq!(got, chair().into_model(created.product_id));
    }

    #[tokio::test]
    async fn delete_reports_missing_row_before_deleting() {
        let (svc, _) = service();
        assert!(matches!(svc.delete(1).await, Err(ServiceError::NotFound(_))));

        let created = svc.create(chair()).await.unwrap();
        svc.delete(created.product_id).await.unwrap();
        assert!(matches!(svc.get(created.product_id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_silent() {
        let (svc, _) = service();
        svc.update(77, chair()).await.unwrap();
        assert!(svc.search(ProductFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_honours_max_price() {
        let (svc, _) = service();
        for cents in [1500, 2500] {
            svc.create(ProductInput { price: Decimal::new(cents, 2), ..chair() }).await.unwrap();
        }
        let found = svc
            .search(ProductFilter {
                min_price: Some(Decimal::new(10, 0)),
                max_price: Some(Decimal::new(20, 0)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price, Decimal::new(1500, 2));
    }

    #[tokio::test]
    async fn store_failure_is_a_value() {
        let (svc, repo) = service();
        repo.set_failing(true);
        assert!(matches!(svc.search(ProductFilter::default()).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.delete(1).await, Err(ServiceError::Db(_))));
    }
}
