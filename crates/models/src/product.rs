use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::category;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub stock: i32,
    pub featured: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::CategoryId)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable columns of a product. Any id in a request body is not part of this
/// type and is dropped during deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
}

impl ProductInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            product_id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            category_id: Set(self.category_id),
            description: Set(self.description),
            color: Set(self.color),
            image_url: Set(self.image_url),
            stock: Set(self.stock),
            featured: Set(self.featured),
        }
    }

    /// Row as it would read back after being stored under `product_id`.
    pub fn into_model(self, product_id: i32) -> Model {
        Model {
            product_id,
            name: self.name,
            price: self.price,
            category_id: self.category_id,
            description: self.description,
            color: self.color,
            image_url: self.image_url,
            stock: self.stock,
            featured: self.featured,
        }
    }
}
