use std::str::FromStr;

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use models::product::{self, ProductInput};
use service::ProductFilter;

use crate::{auth::RequireAdmin, errors::{ApiJson, JsonApiError}, state::ServerState};

/// Raw search parameters. Kept as strings so a blank value can mean "absent".
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Category id to match exactly
    pub cat: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
    /// Color to match exactly
    pub color: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse<T: FromStr>(name: &str, value: Option<String>) -> Result<Option<T>, JsonApiError> {
    present(value)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|_| JsonApiError::bad_request(format!("invalid value for {name}: {v}")))
        })
        .transpose()
}

impl SearchQuery {
    pub fn into_filter(self) -> Result<ProductFilter, JsonApiError> {
        Ok(ProductFilter {
            category_id: parse::<i32>("cat", self.cat)?,
            min_price: parse::<Decimal>("minPrice", self.min_price)?,
            max_price: parse::<Decimal>("maxPrice", self.max_price)?,
            color: present(self.color),
        })
    }
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products matching every supplied filter", body = [crate::openapi::ProductDoc]),
        (status = 400, description = "Malformed filter value"),
        (status = 500, description = "Failed to retrieve products")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    let filter = query.into_filter()?;
    state
        .products
        .search(filter)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to retrieve products"))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Failed to retrieve product")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<product::Model>, JsonApiError> {
    state
        .products
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to retrieve product"))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Failed to create product")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    RequireAdmin(caller): RequireAdmin,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    let created = state
        .products
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to create product"))?;
    info!(product_id = created.product_id, by = %caller.sub, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Updated, or nothing to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Failed to update product")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<StatusCode, JsonApiError> {
    state
        .products
        .update(id, input)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| JsonApiError::from_service(e, "Failed to update product"))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Failed to delete product")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state
        .products
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete product"))
}
