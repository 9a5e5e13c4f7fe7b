//! `hireboard-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod actor;
pub mod claims;
pub mod password;
pub mod roles;
pub mod token;

pub use actor::Actor;
pub use claims::{AuthClaims, TokenValidationError, validate_claims};
pub use password::{hash_password, verify_password, PasswordError};
pub use roles::Role;
pub use token::{Hs256JwtValidator, JwtValidator, TokenError};
