use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ActiveModelTrait, QueryFilter, QueryOrder};

use models::category::{self, CategoryInput};

use crate::errors::{store_failure, ServiceError};

/// Persistence contract for categories. Update and delete report the number of
/// affected rows; zero is a normal outcome, not an error.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all_categories(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;
    async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError>;
    async fn update(&self, id: i32, input: CategoryInput) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn get_all_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find()
            .order_by_asc(category::Column::CategoryId)
            .all(&self.db)
            .await
            .map_err(|e| store_failure("category.get_all", e))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_failure("category.get_by_id", e))
    }

    async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        input
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| store_failure("category.create", e))
    }

    async fn update(&self, id: i32, input: CategoryInput) -> Result<u64, ServiceError> {
        let res = category::Entity::update_many()
            .set(input.into_active_model())
            .filter(category::Column::CategoryId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| store_failure("category.update", e))?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| store_failure("category.delete", e))?;
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
    pub struct MockCategoryRepository {
        rows: Mutex<BTreeMap<i32, category::Model>>,
        last_id: Mutex<i32>,
        failing: AtomicBool,
    }

    impl MockCategoryRepository {
        /// Make every subsequent call fail as if the store were unreachable.
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
    impl CategoryRepository for MockCategoryRepository {
        async fn get_all_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
            self.check()?;
            let mut last = self.last_id.lock().unwrap();
            *last += 1;
            let row = input.into_model(*last);
            self.rows.lock().unwrap().insert(row.category_id, row.clone());
            Ok(row)
        }

        async fn update(&self, id: i32, input: CategoryInput) -> Result<u64, ServiceError> {
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
    use crate::test_support::get_db;

    fn input(name: &str) -> CategoryInput {
        CategoryInput { name: name.into(), description: Some(format!("{name} things")) }
    }

    #[tokio::test]
    async fn category_crud_repository() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCategoryRepository::new(get_db().await?);

        let created = repo.create(input("Furniture")).await?;
        assert!(created.category_id > 0);
        assert_eq!(created.name, "Furniture");

        let found = repo.get_by_id(created.category_id).await?.unwrap();
        assert_eq!(found.category_id, created.category_id);
        assert_eq!(found, created);

        let affected = repo.update(created.category_id, input("Home")).await?;
        assert_eq!(affected, 1);
        let updated = repo.get_by_id(created.category_id).await?.unwrap();
        assert_eq!(updated.name, "Home");
        assert_eq!(updated.description.as_deref(), Some("Home things"));

        assert_eq!(repo.delete(created.category_id).await?, 1);
        assert!(repo.get_by_id(created.category_id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCategoryRepository::new(get_db().await?);
        let a = repo.create(input("B-second-name")).await?;
        let b = repo.create(input("A-first-name")).await?;

        let all = repo.get_all_categories().await?;
        let ids: Vec<i32> = all.iter().map(|c| c.category_id).collect();
        assert_eq!(ids, vec![a.category_id, b.category_id]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_silent_no_ops() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCategoryRepository::new(get_db().await?);
        repo.create(input("Kept")).await?;
        let before = repo.get_all_categories().await?.len();

        assert_eq!(repo.update(9999, input("Ghost")).await?, 0);
        assert_eq!(repo.delete(9999).await?, 0);

        assert_eq!(repo.get_all_categories().await?.len(), before);
        assert!(repo.get_by_id(9999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn closed_pool_surfaces_as_db_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        db.clone().close().await?;
        let repo = SeaOrmCategoryRepository::new(db);
        match repo.get_all_categories().await {
            Err(ServiceError::Db(msg)) => assert!(msg.starts_with("category.get_all")),
            other => panic!("expected db error, got {other:?}"),
        }
        Ok(())
    }
}
