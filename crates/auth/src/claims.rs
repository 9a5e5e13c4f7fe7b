use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hireboard_core::UserId;

use crate::Role;

/// JWT claims model (transport-agnostic).
///
/// This is the minimal set of claims Hireboard expects once a token has been
/// decoded/verified: who the actor is and which global role they carry.
/// Timestamps are Unix seconds so the wire format matches standard JWT
/// `iat`/`exp` handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Global role granted to the subject.
    pub role: Role,

    /// Issued-at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl AuthClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate JWT claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// lives in [`crate::token`].
pub fn validate_claims(claims: &AuthClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    let now = now.timestamp();
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
