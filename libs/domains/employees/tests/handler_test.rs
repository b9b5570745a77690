//! Handler tests for Employees domain
//!
//! The employee router runs against an in-memory repository.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::middleware;
use domain_employees::*;
use http_body_util::BodyExt;
use resource::InMemoryRepository;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    Router::new()
        .nest(
            "/api/employees",
            handlers::router(EmployeeService::new(InMemoryRepository::new())),
        )
        .layer(middleware::from_fn(axum_helpers::error_request_path))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn ada() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "departmentId": 1
    })
}

#[tokio::test]
async fn test_create_employee_returns_201_with_location() {
    let response = app()
        .oneshot(json_request("POST", "/api/employees", ada()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/employees/1"
    );

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["departmentId"], 1);
}

#[tokio::test]
async fn test_create_employee_without_department() {
    let app = app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/employees",
            json!({"firstName": "Grace", "lastName": "Hopper", "email": "grace@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/employees/1")).await.unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert!(body["departmentId"].is_null());
}

#[tokio::test]
async fn test_create_employee_rejects_invalid_email() {
    let mut payload = ada();
    payload["email"] = json!("nope");

    let response = app()
        .oneshot(json_request("POST", "/api/employees", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["path"], "/api/employees");
    assert!(body["details"]["email"].is_array());
}

#[tokio::test]
async fn test_create_employee_rejects_blank_last_name() {
    let mut payload = ada();
    payload["lastName"] = json!("   ");

    let response = app()
        .oneshot(json_request("POST", "/api/employees", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"]["lastName"].is_array());
    assert!(body["details"].get("last_name").is_none());
}

#[tokio::test]
async fn test_update_employee_email() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/api/employees", ada()))
        .await
        .unwrap();

    let mut payload = ada();
    payload["email"] = json!("ada@newmail.com");
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/employees/1", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/employees/1")).await.unwrap();
    let employee: Employee = json_body(response.into_body()).await;
    assert_eq!(employee.email, "ada@newmail.com");
}

#[tokio::test]
async fn test_missing_employee_returns_404_body() {
    let response = app().oneshot(get("/api/employees/12")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Employee not found: id=12");
    assert_eq!(body["path"], "/api/employees/12");
}

#[tokio::test]
async fn test_delete_employee_returns_204_then_404() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/api/employees", ada()))
        .await
        .unwrap();

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/api/employees/1")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
