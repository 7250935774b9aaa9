//! Create `products` table.
//!
//! `category_id` references `categories`; the store is the only enforcer of that link.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::ProductId))
                    .col(string_len(Products::Name, 200))
                    .col(decimal_len(Products::Price, 10, 2))
                    .col(integer(Products::CategoryId))
                    .col(text_null(Products::Description))
                    .col(string_len_null(Products::Color, 64))
                    .col(string_len_null(Products::ImageUrl, 512))
                    .col(integer(Products::Stock).default(0))
                    .col(boolean(Products::Featured).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    Name,
    Price,
    CategoryId,
    Description,
    Color,
    ImageUrl,
    Stock,
    Featured,
}

#[derive(DeriveIden)]
enum Categories { Table, CategoryId }
