use axum::{async_trait, extract::FromRequestParts, http::{header, request::Parts, StatusCode}};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use service::auth::{domain::Claims, errors::AuthError};

use crate::errors::JsonApiError;
use crate::state::ServerState;

const AUTH_COOKIE: &str = "auth_token";

/// Caller holding a valid token with the admin role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Claims);

/// Gate for category mutations: admin when `protect_category_writes` is on, anyone otherwise.
#[derive(Debug, Clone)]
pub struct CategoryWriter(pub Option<Claims>);

/// Read `Authorization: Bearer <token>`, falling back to the `auth_token` cookie.
fn bearer_token(parts: &Parts) -> Result<String, AuthError> {
    if let Some(h) = parts.headers.get(header::AUTHORIZATION) {
        let value = h.to_str().map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        return match value.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(AuthError::InvalidToken("expected Bearer scheme".into())),
        };
    }
    let jar = CookieJar::from_headers(&parts.headers);
    match jar.get(AUTH_COOKIE) {
        Some(c) if !c.value().is_empty() => Ok(c.value().to_string()),
        _ => Err(AuthError::MissingToken),
    }
}

fn reject(parts: &Parts, err: AuthError) -> JsonApiError {
    common::metrics::record_auth_rejection(err.reason());
    warn!(path = %parts.uri.path(), method = %parts.method, reason = err.reason(), err = %err, "admin gate rejected request");
    match err {
        AuthError::Forbidden => JsonApiError::new(StatusCode::FORBIDDEN, "Forbidden", Some(err.to_string())),
        _ => JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(err.to_string())),
    }
}

fn admin_claims(parts: &Parts, state: &ServerState) -> Result<Claims, JsonApiError> {
    bearer_token(parts)
        .and_then(|token| state.tokens.require_admin(&token))
        .map_err(|e| reject(parts, e))
}

#[async_trait]
impl FromRequestParts<ServerState> for RequireAdmin {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        admin_claims(parts, state).map(RequireAdmin)
    }
}

#[async_trait]
impl FromRequestParts<ServerState> for CategoryWriter {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        if !state.protect_category_writes {
            return Ok(CategoryWriter(None));
        }
        admin_claims(parts, state).map(|c| CategoryWriter(Some(c)))
    }
}
