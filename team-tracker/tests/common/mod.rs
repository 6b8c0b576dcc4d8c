#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use shared::models::{CreateEmployeeRequest, CreateProjectRequest};
use team_tracker::AppState;
use team_tracker::api::create_router;
use team_tracker::db::{Employee, MemoryStore, Project, ProjectDraft, RecordStore};
use team_tracker::services::EmployeeService;

pub fn memory_state() -> (MemoryStore, AppState) {
    let store = MemoryStore::new();
    let state = AppState::with_store(Arc::new(store.clone()));
    (store, state)
}

pub fn app() -> (MemoryStore, Router) {
    let (store, state) = memory_state();
    (store, create_router(state))
}

pub async fn seed_project(store: &MemoryStore, name: &str) -> Project {
    let mut uow = store.begin().await.unwrap();
    let project = uow
        .save_project(ProjectDraft {
            id: None,
            name: name.to_string(),
            description: Some(format!("{name} description")),
        })
        .await
        .unwrap();
    uow.commit().await.unwrap();
    project
}

pub fn create_employee_request(username: &str, project_id: Option<i64>) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        middle_name: None,
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        project_id,
    }
}

pub async fn seed_employee(store: &MemoryStore, username: &str, project_id: Option<i64>) -> Employee {
    EmployeeService::new(Arc::new(store.clone()))
        .create(create_employee_request(username, project_id))
        .await
        .unwrap()
}

pub fn create_project_request(name: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        description: None,
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    json_body(response).await
}
