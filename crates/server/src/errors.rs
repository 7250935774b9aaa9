use axum::extract::{rejection::JsonRejection, FromRequest};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use service::errors::ServiceError;

/// JSON error body: `{"error": <title>, "detail": <detail>}`; `detail` omitted when absent.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn bad_request(detail: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail))
    }

    /// Map a service error for one operation. Store failures keep only `failure_title`;
    /// the cause was already logged where it happened.
    pub fn from_service(err: ServiceError, failure_title: &'static str) -> Self {
        match err {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Db(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure_title, None),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "Invalid request body", Some(rejection.body_text()))
    }
}

/// `Json` body extractor whose rejection uses the same error shape as the handlers.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => json!({"error": self.title, "detail": detail}),
            None => json!({"error": self.title}),
        };
        (self.status, Json(body)).into_response()
    }
}
