use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::product::{self, ProductInput};

use crate::errors::{store_failure, ServiceError};
use crate::product::filter::ProductFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<product::Model>, ServiceError>;
    async fn list_by_category_id(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError>;
    /// Overwrites all writable columns of row `id`; the path id is the only key used.
    async fn update(&self, id: i32, input: ProductInput) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(filter.condition())
            .order_by_asc(product::Column::ProductId)
            .all(&self.db)
            .await
            .map_err(|e| store_failure("product.search", e))
    }

    async fn list_by_category_id(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .order_by_asc(product::Column::ProductId)
            .all(&self.db)
            .await
            .map_err(|e| store_failure("product.list_by_category", e))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_failure("product.get_by_id", e))
    }

    async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        input
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| store_failure("product.create", e))
    }

    async fn update(&self, id: i32, input: ProductInput) -> Result<u64, ServiceError> {
        let res = product::Entity::update_many()
            .set(input.into_active_model())
            .filter(product::Column::ProductId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| store_failure("product.update", e))?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| store_failure("product.delete", e))?;
        Ok(res.rows_affected)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<BTreeMap<i32, product::Model>>,
        last_id: Mutex<i32>,
        failing: AtomicBool,
    }

    impl MockProductRepository {
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("mock store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn search(&self, filter: &ProductFilter) -> Result<Vec<product::Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().filter(|p| filter.matches(p)).cloned().collect())
        }

        async fn list_by_category_id(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().filter(|p| p.category_id == category_id).cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
            self.check()?;
            let mut last = self.last_id.lock().unwrap();
            *last += 1;
            let row = input.into_model(*last);
            self.rows.lock().unwrap().insert(row.product_id, row.clone());
            Ok(row)
        }

        async fn update(&self, id: i32, input: ProductInput) -> Result<u64, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(row) => {
                    *row = input.into_model(id);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_category};
    use rust_decimal::Decimal;

    fn input(name: &str, cents: i64, category_id: i32, color: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.into(),
            price: Decimal::new(cents, 2),
            category_id,
            description: Some(format!("{name} description")),
            color: color.map(str::to_string),
            image_url: Some(format!("{}.jpg", name.to_lowercase())),
            stock: 3,
            featured: false,
        }
    }

    #[tokio::test]
    async fn product_crud_repository() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cat = seed_category(&db, "Furniture").await?;
        let other = seed_category(&db, "Lighting").await?;
        let repo = SeaOrmProductRepository::new(db);

        let submitted = input("Chair", 4999, cat, Some("red"));
        let created = repo.create(submitted.clone()).await?;
        assert!(created.product_id > 0);

        let found = repo.get_by_id(created.product_id).await?.unwrap();
        assert_eq!(found, submitted.into_model(created.product_id));
        assert_eq!(found.price, Decimal::new(4999, 2));

        let replacement = input("Lamp", 1250, other, None);
        assert_eq!(repo.update(created.product_id, replacement.clone()).await?, 1);
        let updated = repo.get_by_id(created.product_id).await?.unwrap();
        assert_eq!(updated, replacement.into_model(created.product_id));

        assert_eq!(repo.delete(created.product_id).await?, 1);
        assert!(repo.get_by_id(created.product_id).await?.is_none());
        assert_eq!(repo.delete(created.product_id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn search_applies_every_supplied_filter() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let furniture = seed_category(&db, "Furniture").await?;
        let outdoor = seed_category(&db, "Outdoor").await?;
        let repo = SeaOrmProductRepository::new(db);

        let cheap_red = repo.create(input("Stool", 1000, furniture, Some("red"))).await?;
        let mid_blue = repo.create(input("Chair", 1500, furniture, Some("blue"))).await?;
        let pricey_red = repo.create(input("Bench", 2500, outdoor, Some("red"))).await?;

        let all = repo.search(&ProductFilter::default()).await?;
        let scan = models::product::Entity::find().all(&repo.db).await?;
        assert_eq!(all.len(), scan.len());
        assert_eq!(all.len(), 3);

        let bounded = repo
            .search(&ProductFilter {
                min_price: Some(Decimal::new(10, 0)),
                max_price: Some(Decimal::new(20, 0)),
                ..Default::default()
            })
            .await?;
        let ids: Vec<i32> = bounded.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![cheap_red.product_id, mid_blue.product_id]);

        let red = repo.search(&ProductFilter { color: Some("red".into()), ..Default::default() }).await?;
        let ids: Vec<i32> = red.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![cheap_red.product_id, pricey_red.product_id]);

        let red_furniture = repo
            .search(&ProductFilter { category_id: Some(furniture), color: Some("red".into()), ..Default::default() })
            .await?;
        assert_eq!(red_furniture.len(), 1);
        assert_eq!(red_furniture[0].product_id, cheap_red.product_id);
        Ok(())
    }

    #[tokio::test]
    async fn list_by_category_is_exact() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = seed_category(&db, "A").await?;
        let b = seed_category(&db, "B").await?;
        let repo = SeaOrmProductRepository::new(db);

        repo.create(input("One", 100, a, None)).await?;
        repo.create(input("Two", 200, a, None)).await?;
        repo.create(input("Three", 300, b, None)).await?;

        let in_a = repo.list_by_category_id(a).await?;
        assert_eq!(in_a.len(), 2);
        assert!(in_a.iter().all(|p| p.category_id == a));
        assert!(repo.list_by_category_id(9999).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_is_rejected_by_store() -> Result<(), anyhow::Error> {
        let repo = SeaOrmProductRepository::new(get_db().await?);
        let err = repo.create(input("Orphan", 100, 4242, None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }
}
