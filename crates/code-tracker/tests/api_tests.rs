//! Integration tests for the code tracker API.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use code_tracker::{
    api::{create_router, AppState},
    codes::is_valid_code,
};
use requests_store::Store;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Create a test app backed by the in-memory store.
fn create_test_app() -> Router {
    let state = AppState::new(Store::memory(), Some(SecretString::new("s3cret".into())));
    create_router(state)
}

/// Create a test app with neither store nor admin password configured.
fn create_unconfigured_app() -> Router {
    create_router(AppState::new(Store::Unconfigured, None))
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
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = send(&create_test_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_configured"], true);

    let (_, json) = send(&create_unconfigured_app(), "GET", "/health", None).await;
    assert_eq!(json["store_configured"], false);
}

#[tokio::test]
async fn test_submit_then_track() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/requests",
        Some(json!({ "mobile": "(555) 123-4567" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mobile"], "(555) 123-4567");

    let code = json["code"].as_str().unwrap().to_string();
    assert!(is_valid_code(&code));

    let (status, json) = send(&app, "POST", "/api/track", Some(json!({ "code": code }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    assert_eq!(json["entry"]["mobile"], "5551234567");
    assert_eq!(json["entry"]["code"], code);
    assert_eq!(json["entry"]["status"], "registered");
    assert!(json["entry"]["payload"].is_null());
    assert!(json["entry"]["updated_at"].is_null());

    // Lower-case input resolves to the same entry
    let (_, lower) = send(
        &app,
        "POST",
        "/api/track",
        Some(json!({ "code": code.to_lowercase() })),
    )
    .await;
    assert_eq!(lower, json);
}

#[tokio::test]
async fn test_submit_invalid_mobile() {
    let app = create_test_app();

    for body in [
        json!({ "mobile": "555-1234" }),
        json!({ "mobile": "1234567890123456" }),
        json!({}),
    ] {
        let (status, json) = send(&app, "POST", "/api/requests", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    let (_, json) = send(&app, "GET", "/api/admin/requests", None).await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_submit_non_string_mobile() {
    let app = create_test_app();

    for body in [json!({ "mobile": 5551234567u64 }), json!({ "mobile": null }), json!({})] {
        let (status, json) = send(&app, "POST", "/api/requests", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Mobile number is required");
    }
}

#[tokio::test]
async fn test_submit_without_store() {
    let (status, json) = send(
        &create_unconfigured_app(),
        "POST",
        "/api/requests",
        Some(json!({ "mobile": "5551234567" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"], "Store not initialized");
}

#[tokio::test]
async fn test_track_unknown_code() {
    let (status, json) = send(
        &create_test_app(),
        "POST",
        "/api/track",
        Some(json!({ "code": "ZZZ999" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "found": false }));
}

#[tokio::test]
async fn test_track_validation() {
    let app = create_test_app();

    let cases = [
        (json!({}), "Code is required"),
        (json!({ "code": "" }), "Code is required"),
        (json!({ "code": 123456 }), "Code is required"),
        (json!({ "code": "12ABC3" }), "Invalid code format"),
        (json!({ "code": "ABCD123" }), "Invalid code format"),
    ];

    for (body, message) in cases {
        let (status, json) = send(&app, "POST", "/api/track", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], message);
    }
}

#[tokio::test]
async fn test_track_without_store() {
    let (status, json) = send(
        &create_unconfigured_app(),
        "POST",
        "/api/track",
        Some(json!({ "code": "ABC123" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database connection not available");
}

#[tokio::test]
async fn test_admin_login() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["session"]["isAuthenticated"], true);

    let (status, json) = send(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid password");

    let (status, json) = send(&app, "POST", "/api/admin/login", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Password is required");
}

#[tokio::test]
async fn test_admin_login_not_configured() {
    let (status, json) = send(
        &create_unconfigured_app(),
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "s3cret" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"], "Admin password not configured");
}

#[tokio::test]
async fn test_admin_list_and_update_status() {
    let app = create_test_app();

    for mobile in ["5551111111", "5552222222"] {
        let (status, _) = send(&app, "POST", "/api/requests", Some(json!({ "mobile": mobile }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = send(&app, "GET", "/api/admin/requests", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["requests"][0]["mobile"], "5552222222");
    assert_eq!(json["requests"][1]["mobile"], "5551111111");

    let id = json["requests"][1]["id"].as_str().unwrap().to_string();
    let code = json["requests"][1]["code"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/admin/requests/{}/status", id),
        Some(json!({ "status": "verified" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], "verified");

    let (_, json) = send(&app, "POST", "/api/track", Some(json!({ "code": code }))).await;
    assert_eq!(json["entry"]["status"], "verified");

    let entry: requests_store::Request = serde_json::from_value(json["entry"].clone()).unwrap();
    assert!(entry.updated_at.unwrap() > entry.created_at);
}

#[tokio::test]
async fn test_update_status_missing_or_non_string() {
    let app = create_test_app();
    let (_, json) = send(&app, "POST", "/api/requests", Some(json!({ "mobile": "5551234567" }))).await;
    let code = json["code"].as_str().unwrap().to_string();

    let (_, json) = send(&app, "GET", "/api/admin/requests", None).await;
    let uri = format!("/api/admin/requests/{}/status", json["requests"][0]["id"].as_str().unwrap());

    for body in [json!({}), json!({ "status": 42 }), json!({ "status": "" })] {
        let (status, json) = send(&app, "PUT", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Status is required");
    }

    let (_, json) = send(&app, "POST", "/api/track", Some(json!({ "code": code }))).await;
    assert_eq!(json["entry"]["status"], "registered");
}

#[tokio::test]
async fn test_update_unknown_id_succeeds() {
    let (status, json) = send(
        &create_test_app(),
        "PUT",
        "/api/admin/requests/does-not-exist/status",
        Some(json!({ "status": "verified" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn test_admin_list_without_store() {
    let (status, json) = send(&create_unconfigured_app(), "GET", "/api/admin/requests", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/track")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
