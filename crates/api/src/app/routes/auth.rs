use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use hireboard_auth::{hash_password, verify_password, Hs256JwtValidator, Role};
use hireboard_identity::{validate_password, NewUser, User};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::AuthState;

pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            crate::middleware::auth_middleware,
        ));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(jwt): Extension<Arc<Hs256JwtValidator>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    if let Err(e) = validate_password(&body.password) {
        return errors::domain_error_to_response(e);
    }

    let password_hash = match hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("password hashing failed: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "hash_error",
                "could not process password",
            );
        }
    };

    let user = match User::register(
        NewUser {
            name: body.name,
            email: body.email,
            password_hash,
            role: body.role.unwrap_or(Role::Candidate),
        },
        Utc::now(),
    ) {
        Ok(u) => u,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.users.insert(user.clone()) {
        return errors::store_error_to_response(e);
    }

    let token = match jwt.issue(user.id, user.role, Utc::now()) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("token issuance failed: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "could not issue token",
            );
        }
    };

    (StatusCode::OK, Json(serde_json::json!({ "token": token }))).into_response()
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(jwt): Extension<Arc<Hs256JwtValidator>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let email = body.email.trim().to_lowercase();

    let user = match services.users.find_by_email(&email) {
        Ok(Some(u)) => u,
        // Same response whether the account exists or the password is wrong.
        Ok(None) => return invalid_credentials(),
        Err(e) => return errors::store_error_to_response(e),
    };

    match verify_password(&body.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return invalid_credentials(),
        Err(e) => {
            tracing::error!("password verification failed: {e}");
            return invalid_credentials();
        }
    }

    let token = match jwt.issue(user.id, user.role, Utc::now()) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("token issuance failed: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "could not issue token",
            );
        }
    };

    (StatusCode::OK, Json(serde_json::json!({ "token": token }))).into_response()
}

pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
) -> axum::response::Response {
    match services.users.get(ctx.user_id()) {
        Ok(Some(user)) => (StatusCode::OK, Json(dto::user_to_json(&user))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn invalid_credentials() -> axum::response::Response {
    errors::json_error(
        StatusCode::BAD_REQUEST,
        "invalid_credentials",
        "invalid credentials",
    )
}
