use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use tracing::{debug, instrument};

use super::domain::Claims;
use super::errors::AuthError;

/// Issues and verifies HS256 bearer tokens. Independent of the web framework.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    admin_role: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, admin_role: impl Into<String>) -> Self {
        Self { secret: secret.into(), admin_role: admin_role.into(), ttl: Duration::hours(12) }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn admin_role(&self) -> &str { &self.admin_role }

    /// Sign a token for `sub` holding `role`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::TokenService;
    /// let tokens = TokenService::new("secret", "ADMIN");
    /// let token = tokens.issue("ops@example.com", "ADMIN").unwrap();
    /// let claims = tokens.require_admin(&token).unwrap();
    /// assert_eq!(claims.sub, "ops@example.com");
    /// ```
    pub fn issue(&self, sub: &str, role: &str) -> Result<String, AuthError> {
        let exp = (Utc::now() + self.ttl).timestamp().max(0) as usize;
        let claims = Claims { sub: sub.to_string(), role: role.to_string(), exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &DecodingKey::from_secret(self.secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    #[instrument(skip(self, token))]
    pub fn require_admin(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.verify(token)?;
        if !claims.role.eq_ignore_ascii_case(&self.admin_role) {
            debug!(sub = %claims.sub, role = %claims.role, "non-admin caller rejected");
            return Err(AuthError::Forbidden);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_token_passes() {
        let svc = TokenService::new("test-secret", "ADMIN");
        let token = svc.issue("admin", "ADMIN").unwrap();
        let claims = svc.require_admin(&token).unwrap();
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn role_check_ignores_case() {
        let svc = TokenService::new("test-secret", "ADMIN");
        let token = svc.issue("admin", "admin").unwrap();
        assert!(svc.require_admin(&token).is_ok());
    }

    #[test]
    fn user_token_is_forbidden() {
        let svc = TokenService::new("test-secret", "ADMIN");
        let token = svc.issue("shopper", "USER").unwrap();
        assert!(svc.verify(&token).is_ok());
        assert!(matches!(svc.require_admin(&token), Err(AuthError::Forbidden)));
    }

    #[test]
    fn foreign_signature_is_invalid() {
        let ours = TokenService::new("test-secret", "ADMIN");
        let theirs = TokenService::new("other-secret", "ADMIN");
        let token = theirs.issue("admin", "ADMIN").unwrap();
        assert!(matches!(ours.require_admin(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn expired_token_is_invalid() {
        let svc = TokenService::new("test-secret", "ADMIN").with_ttl(Duration::hours(-1));
        let token = svc.issue("admin", "ADMIN").unwrap();
        assert!(matches!(svc.require_admin(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn garbage_is_invalid() {
        let svc = TokenService::new("test-secret", "ADMIN");
        assert!(matches!(svc.verify("not-a-jwt"), Err(AuthError::InvalidToken(_))));
    }
}
