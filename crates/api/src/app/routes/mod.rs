use axum::{routing::get, Router};

use crate::middleware::AuthState;

pub mod applications;
pub mod auth;
pub mod companies;
pub mod jobs;
pub mod system;

/// Full routing tree. Each domain router layers the bearer-auth middleware
/// onto its protected routes only; public reads stay unauthenticated.
pub fn router(auth: AuthState) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/auth", auth::router(auth.clone()))
        .nest("/api/jobs", jobs::router(auth.clone()))
        .nest("/api/companies", companies::router(auth.clone()))
        .nest("/api/applications", applications::router(auth))
}
