use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;

use hireboard_core::{CompanyId, JobId};
use hireboard_jobs::{authorize_mutate, authorize_post, Job, NewJob};
use hireboard_store::{paginate, Page};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::AuthState;

pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/", post(create_job))
        .route("/:id", put(update_job))
        .route("/:id", delete(delete_job))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            crate::middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(list_jobs))
        .route("/:id", get(get_job))
        .merge(protected)
}

pub async fn list_jobs(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListJobsQuery>,
) -> axum::response::Response {
    let jobs = match services.jobs.list() {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut items: Vec<serde_json::Value> = jobs.iter().map(dto::job_to_json).collect();
    dto::sort_items(&mut items, query.sort.as_deref().unwrap_or("-created_at"));

    let page = Page::new(query.page.unwrap_or(1), query.limit.unwrap_or(25));
    let result = paginate(items, page);

    let mut pagination = serde_json::Map::new();
    if let Some(next) = result.next() {
        pagination.insert(
            "next".to_string(),
            serde_json::json!({ "page": next.page, "limit": next.limit }),
        );
    }
    if let Some(prev) = result.prev() {
        pagination.insert(
            "prev".to_string(),
            serde_json::json!({ "page": prev.page, "limit": prev.limit }),
        );
    }

    let items: Vec<serde_json::Value> = match query.select.as_deref() {
        Some(select) => {
            let fields = dto::projection_fields(select);
            result
                .items
                .into_iter()
                .map(|item| dto::project(item, &fields))
                .collect()
        }
        None => result.items,
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": result.total,
            "pagination": pagination,
            "items": items,
        })),
    )
        .into_response()
}

pub async fn get_job(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let job_id: JobId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid job id"),
    };

    match services.jobs.get(job_id) {
        Ok(Some(job)) => (StatusCode::OK, Json(dto::job_to_json(&job))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "job not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_job(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Json(body): Json<dto::CreateJobRequest>,
) -> axum::response::Response {
    if let Err(e) = authorize_post(&ctx.actor()) {
        return errors::domain_error_to_response(e);
    }

    let company_id: CompanyId = match body.company.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id")
        }
    };

    match services.companies.get(company_id) {
        Ok(Some(_)) => {}
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => return errors::store_error_to_response(e),
    }

    let job = match Job::post(
        NewJob {
            title: body.title,
            description: body.description,
            requirements: body.requirements,
            skills_required: body.skills_required,
            location: body.location,
            job_type: body.job_type,
            salary: body.salary,
            company: company_id,
            status: body.status,
            deadline: body.deadline,
        },
        ctx.user_id(),
        Utc::now(),
    ) {
        Ok(j) => j,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.jobs.insert(job.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(dto::job_to_json(&job))).into_response()
}

pub async fn update_job(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateJobRequest>,
) -> axum::response::Response {
    let job_id: JobId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid job id"),
    };

    // NotFound before any ownership check.
    let mut job = match services.jobs.get(job_id) {
        Ok(Some(j)) => j,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "job not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Err(e) = authorize_mutate(&ctx.actor(), &job) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = job.apply_update(body) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = services.jobs.update(job.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::job_to_json(&job))).into_response()
}

pub async fn delete_job(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let job_id: JobId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid job id"),
    };

    let job = match services.jobs.get(job_id) {
        Ok(Some(j)) => j,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "job not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Err(e) = authorize_mutate(&ctx.actor(), &job) {
        return errors::domain_error_to_response(e);
    }

    // Applications referencing the job are intentionally left in place.
    if let Err(e) = services.jobs.delete(job_id) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}
