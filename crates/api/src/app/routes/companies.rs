use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;

use hireboard_companies::{authorize_create, authorize_manage, Company, NewCompany};
use hireboard_core::{CompanyId, EmployeeId, UserId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::middleware::AuthState;

pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/", post(create_company))
        .route("/:id", put(update_company))
        .route("/:id/employees", post(add_employee))
        .route("/:id/employees/:employee_id", delete(remove_employee))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            crate::middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(list_companies))
        .route("/:id", get(get_company))
        .merge(protected)
}

pub async fn list_companies(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = match services.companies.list() {
        Ok(v) => v.iter().map(dto::company_to_json).collect::<Vec<_>>(),
        Err(e) => return errors::store_error_to_response(e),
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_company(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let company_id: CompanyId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id")
        }
    };

    let company = match services.companies.get(company_id) {
        Ok(Some(c)) => c,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    // Postings are derived from Job.company rather than stored on the record.
    let jobs = match services.jobs.list_by_company(company_id) {
        Ok(v) => v,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut value = dto::company_to_json(&company);
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "jobs".to_string(),
            serde_json::json!(jobs.iter().map(|j| j.id.to_string()).collect::<Vec<_>>()),
        );
    }

    (StatusCode::OK, Json(value)).into_response()
}

pub async fn create_company(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Json(body): Json<dto::CreateCompanyRequest>,
) -> axum::response::Response {
    if let Err(e) = authorize_create(&ctx.actor()) {
        return errors::domain_error_to_response(e);
    }

    // The creator is not added to the employee list; a company admin entry
    // must be granted explicitly.
    let company = match Company::create(
        NewCompany {
            name: body.name,
            description: body.description,
            industry: body.industry,
            website: body.website,
            address: body.address,
        },
        Utc::now(),
    ) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.companies.insert(company.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::CREATED, Json(dto::company_to_json(&company))).into_response()
}

pub async fn update_company(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCompanyRequest>,
) -> axum::response::Response {
    let company_id: CompanyId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id")
        }
    };

    let mut company = match services.companies.get(company_id) {
        Ok(Some(c)) => c,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Err(e) = authorize_manage(&ctx.actor(), &company) {
        return errors::domain_error_to_response(e);
    }

    company.apply_update(body);

    if let Err(e) = services.companies.update(company.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::company_to_json(&company))).into_response()
}

pub async fn add_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::AddEmployeeRequest>,
) -> axum::response::Response {
    let company_id: CompanyId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id")
        }
    };

    let mut company = match services.companies.get(company_id) {
        Ok(Some(c)) => c,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Err(e) = authorize_manage(&ctx.actor(), &company) {
        return errors::domain_error_to_response(e);
    }

    let user_id: UserId = match body.user.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match services.users.get(user_id) {
        Ok(Some(_)) => {}
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => return errors::store_error_to_response(e),
    }

    if let Err(e) = company.add_employee(user_id, body.role) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = services.companies.update(company.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::company_to_json(&company))).into_response()
}

pub async fn remove_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<crate::context::ActorContext>,
    Path((id, employee_id)): Path<(String, String)>,
) -> axum::response::Response {
    let company_id: CompanyId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid company id")
        }
    };
    let employee_id: EmployeeId = match employee_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid employee id")
        }
    };

    let mut company = match services.companies.get(company_id) {
        Ok(Some(c)) => c,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "company not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    if let Err(e) = authorize_manage(&ctx.actor(), &company) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = company.remove_employee(employee_id) {
        return errors::domain_error_to_response(e);
    }

    if let Err(e) = services.companies.update(company.clone()) {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::company_to_json(&company))).into_response()
}
