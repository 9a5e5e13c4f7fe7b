use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = hireboard_api::app::build_app("test-secret".to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn register(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    email: &str,
    role: &str,
) -> String {
    let res = client
        .post(format!("{}/api/auth/register", base_url))
        .json(&json!({
            "name": name,
            "email": email,
            "password": "hunter22",
            "role": role,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK, "registration failed for {email}");
    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn user_id(client: &reqwest::Client, base_url: &str, token: &str) -> String {
    let res = client
        .get(format!("{}/api/auth/me", base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

async fn create_company(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    name: &str,
) -> String {
    let res = client
        .post(format!("{}/api/companies", base_url))
        .bearer_auth(token)
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

async fn create_job(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    company_id: &str,
    title: &str,
    extra: serde_json::Value,
) -> String {
    let mut body = json!({
        "title": title,
        "description": "Build and run backend services",
        "location": "Berlin",
        "job_type": "full-time",
        "company": company_id,
    });
    if let (Some(base), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }

    let res = client
        .post(format!("{}/api/jobs", base_url))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/me", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/api/jobs", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Garbage token is rejected the same way.
    let res = client
        .get(format!("{}/api/applications", srv.base_url))
        .bearer_auth("not.a.jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_returns_token_and_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "Alice", "alice@example.com", "candidate").await;

    let res = client
        .post(format!("{}/api/auth/login", srv.base_url))
        .json(&json!({ "email": "Alice@Example.com", "password": "hunter22" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["token"].as_str().is_some());

    let res = client
        .post(format!("{}/api/auth/login", srv.base_url))
        .json(&json!({ "email": "alice@example.com", "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn duplicate_registration_email_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "Bob", "bob@example.com", "candidate").await;

    let res = client
        .post(format!("{}/api/auth/register", srv.base_url))
        .json(&json!({
            "name": "Bob Again",
            "email": "BOB@example.com",
            "password": "hunter22",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn job_mutation_requires_poster_or_admin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let poster = register(&client, &srv.base_url, "Poster", "poster@example.com", "recruiter").await;
    let other = register(&client, &srv.base_url, "Other", "other@example.com", "recruiter").await;
    let admin = register(&client, &srv.base_url, "Root", "root@example.com", "admin").await;

    let company = create_company(&client, &srv.base_url, &poster, "Acme").await;
    let job = create_job(&client, &srv.base_url, &poster, &company, "Backend Engineer", json!({})).await;

    // Another recruiter: authenticated but not the poster.
    let res = client
        .put(format!("{}/api/jobs/{}", srv.base_url, job))
        .bearer_auth(&other)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The poster may update.
    let res = client
        .put(format!("{}/api/jobs/{}", srv.base_url, job))
        .bearer_auth(&poster)
        .json(&json!({ "title": "Senior Backend Engineer" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["title"], "Senior Backend Engineer");

    // A global admin may delete without being the poster.
    let res = client
        .delete(format!("{}/api/jobs/{}", srv.base_url, job))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/jobs/{}", srv.base_url, job))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_application_to_same_job_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let recruiter = register(&client, &srv.base_url, "Rec", "rec@example.com", "recruiter").await;
    let candidate = register(&client, &srv.base_url, "Cand", "cand@example.com", "candidate").await;

    let company = create_company(&client, &srv.base_url, &recruiter, "Acme").await;
    let job = create_job(&client, &srv.base_url, &recruiter, &company, "Backend Engineer", json!({})).await;

    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .json(&json!({ "job": job }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .json(&json!({ "job": job }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already applied"));
}

#[tokio::test]
async fn closed_job_and_past_deadline_reject_applications() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let recruiter = register(&client, &srv.base_url, "Rec", "rec@example.com", "recruiter").await;
    let candidate = register(&client, &srv.base_url, "Cand", "cand@example.com", "candidate").await;

    let company = create_company(&client, &srv.base_url, &recruiter, "Acme").await;
    let closed = create_job(
        &client,
        &srv.base_url,
        &recruiter,
        &company,
        "Closed Role",
        json!({ "status": "closed" }),
    )
    .await;
    let expired = create_job(
        &client,
        &srv.base_url,
        &recruiter,
        &company,
        "Expired Role",
        json!({ "deadline": "2020-01-01T00:00:00Z" }),
    )
    .await;

    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .json(&json!({ "job": closed }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("not currently accepting"));

    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .json(&json!({ "job": expired }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("deadline"));

    // Only candidates may apply at all.
    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&recruiter)
        .json(&json!({ "job": closed }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn company_name_must_be_unique() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let recruiter = register(&client, &srv.base_url, "Rec", "rec@example.com", "recruiter").await;

    let first = create_company(&client, &srv.base_url, &recruiter, "Acme").await;

    let res = client
        .post(format!("{}/api/companies", srv.base_url))
        .bearer_auth(&recruiter)
        .json(&json!({ "name": "Acme" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "duplicate");

    // A distinct name goes through and is retrievable by id.
    let second = create_company(&client, &srv.base_url, &recruiter, "Globex").await;
    let res = client
        .get(format!("{}/api/companies/{}", srv.base_url, second))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Globex");
    assert_ne!(first, second);
}

#[tokio::test]
async fn removing_unknown_employee_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin = register(&client, &srv.base_url, "Root", "root@example.com", "admin").await;
    let company = create_company(&client, &srv.base_url, &admin, "Acme").await;

    let res = client
        .delete(format!(
            "{}/api/companies/{}/employees/{}",
            srv.base_url,
            company,
            uuid::Uuid::now_v7()
        ))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn job_listing_is_public_paginated_and_projectable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let recruiter = register(&client, &srv.base_url, "Rec", "rec@example.com", "recruiter").await;
    let company = create_company(&client, &srv.base_url, &recruiter, "Acme").await;
    for title in ["Backend", "Frontend", "Platform"] {
        create_job(&client, &srv.base_url, &recruiter, &company, title, json!({})).await;
    }

    // No token needed for reads.
    let res = client
        .get(format!(
            "{}/api/jobs?limit=2&sort=title&select=title",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 3);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Backend");
    // Projection keeps id + requested fields only.
    assert!(items[0].get("description").is_none());
    assert!(items[0].get("id").is_some());

    assert_eq!(body["pagination"]["next"]["page"], 2);
    assert!(body["pagination"].get("prev").is_none());

    let res = client
        .get(format!("{}/api/jobs?limit=2&page=2&sort=title", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["title"], "Platform");
    assert_eq!(body["pagination"]["prev"]["page"], 1);
    assert!(body["pagination"].get("next").is_none());
}

#[tokio::test]
async fn full_recruitment_flow() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let recruiter = register(&client, &srv.base_url, "Rec", "rec@example.com", "recruiter").await;
    let admin = register(&client, &srv.base_url, "Root", "root@example.com", "admin").await;
    let candidate = register(&client, &srv.base_url, "Cand", "cand@example.com", "candidate").await;
    let recruiter_id = user_id(&client, &srv.base_url, &recruiter).await;

    let company = create_company(&client, &srv.base_url, &recruiter, "Acme").await;

    // Creating a company does not grant management rights over it.
    let res = client
        .put(format!("{}/api/companies/{}", srv.base_url, company))
        .bearer_auth(&recruiter)
        .json(&json!({ "industry": "Software" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // A global admin grants the recruiter a company-admin entry.
    let res = client
        .post(format!("{}/api/companies/{}/employees", srv.base_url, company))
        .bearer_auth(&admin)
        .json(&json!({ "user": recruiter_id, "role": "admin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Now the update goes through.
    let res = client
        .put(format!("{}/api/companies/{}", srv.base_url, company))
        .bearer_auth(&recruiter)
        .json(&json!({ "industry": "Software" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let job = create_job(&client, &srv.base_url, &recruiter, &company, "Backend Engineer", json!({})).await;

    // Candidate applies.
    let res = client
        .post(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .json(&json!({ "job": job, "resume_link": "https://example.com/cv.pdf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let application: serde_json::Value = res.json().await.unwrap();
    let application_id = application["id"].as_str().unwrap().to_string();
    assert_eq!(application["status"], "submitted");

    // The recruiter (job poster) moves the application forward and leaves a note.
    let res = client
        .put(format!("{}/api/applications/{}/status", srv.base_url, application_id))
        .bearer_auth(&recruiter)
        .json(&json!({ "status": "shortlisted" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(format!("{}/api/applications/{}/notes", srv.base_url, application_id))
        .bearer_auth(&recruiter)
        .json(&json!({ "text": "Strong systems background" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The candidate cannot move their own application.
    let res = client
        .put(format!("{}/api/applications/{}/status", srv.base_url, application_id))
        .bearer_auth(&candidate)
        .json(&json!({ "status": "hired" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // But they see the new status in their own listing.
    let res = client
        .get(format!("{}/api/applications", srv.base_url))
        .bearer_auth(&candidate)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["items"][0]["status"], "shortlisted");
    assert_eq!(body["items"][0]["notes"][0]["text"], "Strong systems background");
}
