use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;

use hireboard_applications::{authorize_apply, authorize_review, authorize_view, Application};
use hireboard_auth::Role;
use hireboard_core::{ApplicationId, JobId};
use hireboard_jobs::Job;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::AuthState;

pub fn router(auth: AuthState) -> Router {
    Router::new()
        .route("/", get(list_applications).post(create_application))
        .route("/:id", get(get_application))
        .route("/:id/status", put(update_status))
        .route("/:id/notes", post(add_note))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            crate::middleware::auth_middleware,
        ))
}

/// Role-filtered listing: admins see everything, candidates their own
/// applications, recruiters the applications to jobs they posted.
pub async fn list_applications(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
) -> axum::response::Response {
    let result = match ctx.role() {
        Role::Admin => services.applications.list(),
        Role::Candidate => services.applications.list_by_candidate(ctx.user_id()),
        Role::Recruiter => services
            .jobs
            .list_by_poster(ctx.user_id())
            .and_then(|jobs| {
                let ids: Vec<JobId> = jobs.iter().map(|j| j.id).collect();
                services.applications.list_for_jobs(&ids)
            }),
    };

    let mut applications = match result {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));

    let items: Vec<_> = applications.iter().map(dto::application_to_json).collect();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "count": items.len(), "items": items })),
    )
        .into_response()
}

pub async fn create_application(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Json(body): Json<dto::CreateApplicationRequest>,
) -> axum::response::Response {
    if let Err(e) = authorize_apply(&ctx.actor()) {
        return errors::domain_error_to_response(e);
    }

    let job_id: JobId = match body.job.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid job id"),
    };

    let job = match services.jobs.get(job_id) {
        Ok(Some(j)) => j,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "job not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let already_applied = match services.applications.exists_for(job_id, ctx.user_id()) {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let application = match Application::submit(
        ctx.user_id(),
        &job,
        already_applied,
        body.resume_link,
        Utc::now(),
    ) {
        Ok(a) => a,
        Err(e) => return errors::domain_error_to_response(e),
    };

    // The store re-checks the (job, candidate) pair under its write lock.
    if let Err(e) = services.applications.insert(application.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(dto::application_to_json(&application))).into_response()
}

pub async fn get_application(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let (application, parent_job) = match resolve(&services, &id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if let Err(e) = authorize_view(&ctx.actor(), &application, parent_job.as_ref()) {
        return errors::domain_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::application_to_json(&application))).into_response()
}

pub async fn update_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateStatusRequest>,
) -> axum::response::Response {
    let (mut application, parent_job) = match resolve(&services, &id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if let Err(e) = authorize_review(&ctx.actor(), parent_job.as_ref()) {
        return errors::domain_error_to_response(e);
    }

    let status = match errors::parse_application_status(&body.status) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    application.set_status(status);

    if let Err(e) = services.applications.update(application.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::application_to_json(&application))).into_response()
}

pub async fn add_note(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::AddNoteRequest>,
) -> axum::response::Response {
    let (mut application, parent_job) = match resolve(&services, &id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if let Err(e) = authorize_review(&ctx.actor(), parent_job.as_ref()) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = application.add_note(body.text, ctx.user_id(), Utc::now()) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = services.applications.update(application.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::application_to_json(&application))).into_response()
}

/// Resolve an application and its parent job. A missing application id is
/// NotFound before any authorization runs; a missing parent job is `None`
/// (the policy then denies recruiters who cannot prove ownership).
fn resolve(
    services: &AppServices,
    id: &str,
) -> Result<(Application, Option<Job>), axum::response::Response> {
    let application_id: ApplicationId = id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid application id")
    })?;

    let application = match services.applications.get(application_id) {
        Ok(Some(a)) => a,
        Ok(None) => {
            return Err(errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                "application not found",
            ))
        }
        Err(e) => return Err(errors::store_error_to_response(e)),
    };

    let parent_job = match services.jobs.get(application.job) {
        Ok(j) => j,
        Err(e) => return Err(errors::store_error_to_response(e)),
    };

    Ok((application, parent_job))
}
