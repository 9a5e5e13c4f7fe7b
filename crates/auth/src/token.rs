//! Bearer token issuance and verification (HS256 JWT).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use hireboard_core::UserId;

use crate::claims::{AuthClaims, validate_claims};
use crate::Role;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is invalid: {0}")]
    Invalid(String),

    #[error(transparent)]
    Claims(#[from] crate::claims::TokenValidationError),

    #[error("token encoding failed: {0}")]
    Encode(String),
}

/// Verifies a bearer token and returns its claims.
///
/// Trait seam so the API middleware can be exercised with a stub validator.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenError>;
}

/// HS256 (shared-secret) JWT issuer/validator.
pub struct Hs256JwtValidator {
    secret: Vec<u8>,
    lifetime: Duration,
}

impl Hs256JwtValidator {
    const DEFAULT_LIFETIME_HOURS: i64 = 24;

    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            secret,
            lifetime: Duration::hours(Self::DEFAULT_LIFETIME_HOURS),
        }
    }

    pub fn with_lifetime(secret: Vec<u8>, lifetime: Duration) -> Self {
        Self { secret, lifetime }
    }

    /// Issue a signed token for a user.
    pub fn issue(&self, user_id: UserId, role: Role, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AuthClaims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| TokenError::Encode(e.to_string()))
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked deterministically below against the caller's clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<AuthClaims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Hs256JwtValidator {
        Hs256JwtValidator::new(b"test-secret".to_vec())
    }

    #[test]
    fn issue_then_validate_roundtrip() {
        let v = validator();
        let user_id = UserId::new();
        let now = Utc::now();

        let token = v.issue(user_id, Role::Recruiter, now).unwrap();
        let claims = v.validate(&token, now).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, Role::Recruiter);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let v = validator();
        let other = Hs256JwtValidator::new(b"other-secret".to_vec());
        let now = Utc::now();

        let token = other.issue(UserId::new(), Role::Admin, now).unwrap();
        let err = v.validate(&token, now).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }

    #[test]
    fn rejects_expired_token() {
        let v = Hs256JwtValidator::with_lifetime(b"test-secret".to_vec(), Duration::minutes(5));
        let now = Utc::now();

        let token = v.issue(UserId::new(), Role::Candidate, now).unwrap();
        let later = now + Duration::minutes(6);
        let err = v.validate(&token, later).unwrap_err();
        assert!(matches!(err, TokenError::Claims(_)));
    }

    #[test]
    fn rejects_garbage_token() {
        let v = validator();
        let err = v.validate("not.a.jwt", Utc::now()).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)));
    }
}
