#![cfg(test)]
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use migration::MigratorTrait;
use models::category::CategoryInput;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with the catalog schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_category(db: &DatabaseConnection, name: &str) -> Result<i32, anyhow::Error> {
    let row = CategoryInput { name: name.into(), description: None }
        .into_active_model()
        .insert(db)
        .await?;
    Ok(row.category_id)
}
