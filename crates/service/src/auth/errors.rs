use thiserror::Error;

/// Reasons a caller is turned away from an admin-only operation
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("administrative role required")]
    Forbidden,
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable label for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidToken(_) => "invalid_token",
            AuthError::Forbidden => "forbidden",
            AuthError::TokenError(_) => "token_error",
        }
    }
}
