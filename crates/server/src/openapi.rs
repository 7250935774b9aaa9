use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use serde::Serialize;
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDoc {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoryInputDoc {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub product_id: i32,
    pub name: String,
    /// Two decimal places
    #[schema(example = 49.99)]
    pub price: f64,
    pub category_id: i32,
    pub description: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub stock: i32,
    pub featured: bool,
}

/// Any `productId` in the body is ignored.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInputDoc {
    pub name: String,
    #[schema(example = 49.99)]
    pub price: f64,
    pub category_id: i32,
    pub description: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    #[schema(default = 0)]
    pub stock: i32,
    #[schema(default = false)]
    pub featured: bool,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::products,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::products::search,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryDoc,
            CategoryInputDoc,
            ProductDoc,
            ProductInputDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "products")
    )
)]
pub struct ApiDoc;
