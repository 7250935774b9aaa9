use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use models::{category::{self, CategoryInput}, product};

use crate::{auth::CategoryWriter, errors::{ApiJson, JsonApiError}, state::ServerState};

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses(
        (status = 200, description = "All categories", body = [crate::openapi::CategoryDoc]),
        (status = 500, description = "Failed to retrieve categories")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    state
        .categories
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to retrieve categories"))
}

#[utoipa::path(
    get, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CategoryDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Failed to retrieve category")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<category::Model>, JsonApiError> {
    state
        .categories
        .get(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to retrieve category"))
}

#[utoipa::path(
    get, path = "/categories/{id}/products", tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Products in the category; empty for an unknown category", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Failed to retrieve products")
    )
)]
pub async fn products(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    state
        .categories
        .products(id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Failed to retrieve products"))
}

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::CategoryInputDoc,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryDoc),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Failed to create category")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    CategoryWriter(caller): CategoryWriter,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<(StatusCode, Json<category::Model>), JsonApiError> {
    let created = state
        .categories
        .create(input)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to create category"))?;
    info!(category_id = created.category_id, by = caller.as_ref().map(|c| c.sub.as_str()), "created category");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = crate::openapi::CategoryInputDoc,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Updated, or nothing to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Failed to update category")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    _writer: CategoryWriter,
    Path(id): Path<i32>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<StatusCode, JsonApiError> {
    state
        .categories
        .update(id, input)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| JsonApiError::from_service(e, "Failed to update category"))
}

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Deleted, or nothing to delete"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Failed to delete category")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    _writer: CategoryWriter,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state
        .categories
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete category"))
}
