use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use hireboard_applications::ApplicationStatus;
use hireboard_core::DomainError;
use hireboard_store::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::BAD_REQUEST, "conflict", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound(entity) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
        }
        DomainError::Forbidden(msg) => json_error(StatusCode::FORBIDDEN, "forbidden", msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Duplicate { entity, detail } => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate",
            format!("{entity} already exists: {detail}"),
        ),
        StoreError::NotFound(entity) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
        }
        StoreError::Poisoned => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            "store lock poisoned",
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_application_status(s: &str) -> Result<ApplicationStatus, axum::response::Response> {
    match s.to_lowercase().as_str() {
        "submitted" => Ok(ApplicationStatus::Submitted),
        "reviewed" => Ok(ApplicationStatus::Reviewed),
        "shortlisted" => Ok(ApplicationStatus::Shortlisted),
        "interviewed" => Ok(ApplicationStatus::Interviewed),
        "offered" => Ok(ApplicationStatus::Offered),
        "rejected" => Ok(ApplicationStatus::Rejected),
        "hired" => Ok(ApplicationStatus::Hired),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_status",
            "status must be one of: submitted, reviewed, shortlisted, interviewed, offered, rejected, hired",
        )),
    }
}
