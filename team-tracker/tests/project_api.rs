mod common;

use http::StatusCode;
use serde_json::json;

use common::{app, expect, send, seed_employee, seed_project};

#[tokio::test]
async fn test_create_project() {
    let (_store, app) = app();
    let body = json!({ "name": "Quack", "description": "Duck tracking" });
    let created = expect(
        send(&app, "POST", "/api/projects", Some(body)).await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Quack");
    assert_eq!(created["description"], "Duck tracking");
    assert_eq!(created["employees"], json!([]));
}

#[tokio::test]
async fn test_create_project_validation() {
    let (store, app) = app();
    for body in [
        json!({ "name": "" }),
        json!({ "name": "   " }),
        json!({ "description": "no name" }),
        json!({ "name": "Quack", "description": "d".repeat(501) }),
    ] {
        let response = send(&app, "POST", "/api/projects", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(store.stats().project_saves(), 0);
}

#[tokio::test]
async fn test_get_project_lists_employees() {
    let (store, app) = app();
    let project = seed_project(&store, "Quack").await;
    let other = seed_project(&store, "Moo").await;
    seed_employee(&store, "a", Some(project.id)).await;
    seed_employee(&store, "b", Some(other.id)).await;
    seed_employee(&store, "c", Some(project.id)).await;

    let found = expect(
        send(&app, "GET", &format!("/api/projects/{}", project.id), None).await,
        StatusCode::OK,
    )
    .await;
    let members: Vec<&str> = found["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["username"].as_str().unwrap())
        .collect();
    assert_eq!(members, ["a", "c"]);
    assert_eq!(found["employees"][0]["projectName"], "Quack");
}

#[tokio::test]
async fn test_get_project_missing() {
    let (_store, app) = app();
    let error = expect(
        send(&app, "GET", "/api/projects/9", None).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(error["code"], 8501);
    assert_eq!(error["message"], "Project not found with id: 9");
    assert_eq!(error["details"]["resource"], "project");
}

#[tokio::test]
async fn test_update_project() {
    let (store, app) = app();
    let project = seed_project(&store, "Quack").await;
    let employee = seed_employee(&store, "a", Some(project.id)).await;
    let uri = format!("/api/projects/{}", project.id);

    let body = json!({ "name": "Quack v2" });
    let updated = expect(send(&app, "PUT", &uri, Some(body)).await, StatusCode::OK).await;
    assert_eq!(updated["name"], "Quack v2");
    assert!(updated["description"].is_null());
    assert_eq!(updated["employees"][0]["projectName"], "Quack v2");

    // Employees see the new name through the denormalized field
    let seen = expect(
        send(&app, "GET", &format!("/api/employees/{}", employee.id), None).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(seen["projectName"], "Quack v2");

    let response = send(&app, "PUT", "/api/projects/99", Some(json!({ "name": "x" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects() {
    let (store, app) = app();
    let empty = expect(send(&app, "GET", "/api/projects", None).await, StatusCode::OK).await;
    assert_eq!(empty, json!([]));

    let a = seed_project(&store, "A").await;
    seed_project(&store, "B").await;
    seed_employee(&store, "x", Some(a.id)).await;

    let list = expect(send(&app, "GET", "/api/projects", None).await, StatusCode::OK).await;
    assert_eq!(list[0]["name"], "A");
    assert_eq!(list[0]["employees"].as_array().unwrap().len(), 1);
    assert_eq!(list[1]["name"], "B");
    assert_eq!(list[1]["employees"], json!([]));
}
