//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring behind the repository traits
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs, JSON mapping, list-query helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use hireboard_auth::{Hs256JwtValidator, JwtValidator};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Protected sub-routers carry the bearer-auth layer; public routes (health,
/// register/login, job and company reads) are merged in without it.
pub fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(Hs256JwtValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState {
        jwt: jwt.clone() as Arc<dyn JwtValidator>,
    };

    let services = Arc::new(services::build_services());

    routes::router(auth_state)
        .layer(Extension(services))
        .layer(Extension(jwt))
        .layer(ServiceBuilder::new())
}
