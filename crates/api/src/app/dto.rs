use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::Value;

use hireboard_applications::Application;
use hireboard_companies::{Address, Company, CompanyRole, UpdateCompany};
use hireboard_identity::User;
use hireboard_jobs::{Job, JobStatus, JobType, Salary, UpdateJob};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<hireboard_auth::Role>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<Salary>,
    pub company: String,
    pub status: Option<JobStatus>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

pub type UpdateJobRequest = UpdateJob;

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
}

pub type UpdateCompanyRequest = UpdateCompany;

#[derive(Debug, Deserialize)]
pub struct AddEmployeeRequest {
    pub user: String,
    pub role: CompanyRole,
}

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub job: String,
    pub resume_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub text: String,
}

/// Query parameters for paginated job listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Comma-separated field projection.
    pub select: Option<String>,
    /// Comma-separated sort keys; `-` prefix for descending.
    pub sort: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// User representation for responses. Never includes the password hash.
pub fn user_to_json(user: &User) -> Value {
    serde_json::json!({
        "id": user.id.to_string(),
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "skills": user.skills,
        "experience": user.experience,
        "education": user.education,
        "resume": user.resume,
        "created_at": user.created_at,
    })
}

pub fn job_to_json(job: &Job) -> Value {
    serde_json::json!({
        "id": job.id.to_string(),
        "title": job.title,
        "description": job.description,
        "requirements": job.requirements,
        "skills_required": job.skills_required,
        "location": job.location,
        "job_type": job.job_type,
        "salary": job.salary,
        "company": job.company.to_string(),
        "posted_by": job.posted_by.to_string(),
        "status": job.status,
        "deadline": job.deadline,
        "created_at": job.created_at,
    })
}

pub fn company_to_json(company: &Company) -> Value {
    serde_json::json!({
        "id": company.id.to_string(),
        "name": company.name,
        "description": company.description,
        "industry": company.industry,
        "website": company.website,
        "address": company.address,
        "employees": company.employees.iter().map(|e| serde_json::json!({
            "id": e.id.to_string(),
            "user": e.user.to_string(),
            "role": e.role,
        })).collect::<Vec<_>>(),
        "created_at": company.created_at,
    })
}

pub fn application_to_json(application: &Application) -> Value {
    serde_json::json!({
        "id": application.id.to_string(),
        "job": application.job.to_string(),
        "candidate": application.candidate.to_string(),
        "resume_link": application.resume_link,
        "status": application.status,
        "notes": application.notes.iter().map(|n| serde_json::json!({
            "text": n.text,
            "created_by": n.created_by.to_string(),
            "created_at": n.created_at,
        })).collect::<Vec<_>>(),
        "applied_at": application.applied_at,
    })
}

// -------------------------
// List-query helpers (sort + select over mapped JSON objects)
// -------------------------

/// Sort mapped items by comma-separated keys; `-` prefix flips to descending.
///
/// RFC3339 timestamps sort correctly as strings. Missing fields sort first.
pub fn sort_items(items: &mut [Value], sort: &str) {
    let keys: Vec<(&str, bool)> = sort
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| match k.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (k, false),
        })
        .collect();

    items.sort_by(|a, b| {
        for (key, descending) in &keys {
            let ord = compare_field(a.get(*key), b.get(*key));
            let ord = if *descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), Some(_)) => Ordering::Less,
        (Some(_), None | Some(Value::Null)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Keep only the requested fields of a mapped object. `id` always survives.
pub fn project(mut item: Value, fields: &[&str]) -> Value {
    if let Value::Object(map) = &mut item {
        map.retain(|k, _| k == "id" || fields.contains(&k.as_str()));
    }
    item
}

/// Split a comma-separated projection list into field names.
pub fn projection_fields(select: &str) -> Vec<&str> {
    select
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sort_descending_by_string_field() {
        let mut items = vec![
            json!({"id": "1", "created_at": "2026-01-01T00:00:00Z"}),
            json!({"id": "2", "created_at": "2026-03-01T00:00:00Z"}),
            json!({"id": "3", "created_at": "2026-02-01T00:00:00Z"}),
        ];
        sort_items(&mut items, "-created_at");
        let ids: Vec<_> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let mut items = vec![
            json!({"id": "a", "status": "open", "title": "Zoo"}),
            json!({"id": "b", "status": "open", "title": "Ant"}),
        ];
        sort_items(&mut items, "status,title");
        assert_eq!(items[0]["id"], "b");
    }

    #[test]
    fn projection_keeps_id_and_requested_fields() {
        let item = json!({"id": "1", "title": "Backend", "location": "Berlin", "salary": null});
        let projected = project(item, &projection_fields("title"));
        let map = projected.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("id"));
        assert!(map.contains_key("title"));
    }

    #[test]
    fn user_json_never_leaks_password_hash() {
        let user = User::register(
            hireboard_identity::NewUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "$argon2id$secret".to_string(),
                role: hireboard_auth::Role::Candidate,
            },
            chrono::Utc::now(),
        )
        .unwrap();

        let value = user_to_json(&user);
        assert!(value.get("password_hash").is_none());
        assert!(!value.to_string().contains("argon2id"));
    }
}
