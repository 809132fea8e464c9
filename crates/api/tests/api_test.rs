//! Integration tests for API endpoints.
//!
//! The router runs against the in-memory store, so no database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use api_lib::routes::create_router;
use api_lib::state::AppState;
use domain::{NewUser, User};
use user_service_lib::repository::{InMemoryUserStore, StoreError, StoreResult, UserRepository};
use user_service_lib::service::UserManager;

// =============================================================================
// Helpers
// =============================================================================

/// Store whose every call fails, for the internal-error paths
struct BrokenStore;

#[async_trait]
impl UserRepository for BrokenStore {
    async fn create(&self, _user: NewUser) -> StoreResult<User> {
        Err(StoreError::unexpected("connection refused"))
    }

    async fn find_by_id(&self, _id: Uuid) -> StoreResult<Option<User>> {
        Err(StoreError::unexpected("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
        Err(StoreError::unexpected("connection refused"))
    }

    async fn update(&self, _user: &User) -> StoreResult<()> {
        Err(StoreError::unexpected("connection refused"))
    }

    async fn delete(&self, _id: Uuid) -> StoreResult<()> {
        Err(StoreError::unexpected("connection refused"))
    }
}

fn app_with(repo: Arc<dyn UserRepository>) -> Router {
    let service = Arc::new(UserManager::with_system_clock(repo));
    create_router(AppState::new(service))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryUserStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

fn john() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com",
        "password": "password"
    })
}

async fn create_john(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/users", Some(john())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_up() {
    let (status, body) = send(&app(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "up" }));
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_record_without_password() {
    let app = app();
    let (status, body) = send(&app, "POST", "/users", Some(john())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["email"], "john.doe@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_user_validation_error() {
    let mut input = john();
    input["lastName"] = json!("");

    let (status, body) = send(&app(), "POST", "/users", Some(input)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "last name is required");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = app();
    create_john(&app).await;

    let (status, body) = send(&app, "POST", "/users", Some(john())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "user with this email already exists");
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_by_id_and_email() {
    let app = app();
    let id = create_john(&app).await;

    let (status, by_id) = send(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["lastName"], "Doe");

    let (status, by_email) = send(&app, "GET", "/users/by-email/john.doe@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_email["id"], by_id["id"]);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let uri = format!("/users/{}", Uuid::new_v4());
    let (status, body) = send(&app(), "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "user not found");
}

#[tokio::test]
async fn test_malformed_id_uses_error_envelope() {
    let (status, body) = send(&app(), "GET", "/users/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_update_email_without_format_check() {
    let app = app();
    let id = create_john(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/users/{id}/email"),
        Some(json!({ "email": "johnny" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "johnny");
}

#[tokio::test]
async fn test_update_names() {
    let app = app();
    let id = create_john(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/users/{id}"),
        Some(json!({ "firstName": "Jane" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Jane");
    assert_eq!(body["lastName"], "Doe");
}

#[tokio::test]
async fn test_update_password() {
    let app = app();
    let id = create_john(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/users/{id}/password"),
        Some(json!({ "password": "n3w-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/users/{id}/password"),
        Some(json!({ "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "password is required");
}

#[tokio::test]
async fn test_update_email_conflict_and_success() {
    let app = app();
    let john_id = create_john(&app).await;

    let mut jane = john();
    jane["firstName"] = json!("Jane");
    jane["email"] = json!("jane.doe@example.com");
    let (status, _) = send(&app, "POST", "/users", Some(jane)).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/users/{john_id}/email");
    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "email": "jane.doe@example.com" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "user with this email already exists");

    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "email": "johnny@example.com" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "johnny@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let app = app();
    let id = create_john(&app).await;
    let uri = format!("/users/{id}");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "user not found");
}

#[tokio::test]
async fn test_store_failure_is_hidden() {
    let app = app_with(Arc::new(BrokenStore));

    let (status, body) = send(&app, "POST", "/users", Some(john())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "an internal error occurred");
    assert!(!body.to_string().contains("connection refused"));

    let uri = format!("/users/{}", Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}
