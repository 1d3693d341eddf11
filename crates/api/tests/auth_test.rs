mod common;

use axum::http::StatusCode;
use common::{PASSWORD, TestApp};
use serde_json::json;
use shared::testing::TestOptions;

#[tokio::test]
async fn health_check_reports_api_is_working() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "API IS WORKING");
}

#[tokio::test]
async fn register_then_login_and_fetch_profile() {
    let app = TestApp::new().await;

    let token = app.register_user("reader", "reader@example.com").await;

    let (status, body) = app.get("/api/user/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "reader");
    assert_eq!(body["data"]["email"], "reader@example.com");

    let (status, body) = app
        .post(
            "/api/user/login",
            None,
            json!({ "email": "reader@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].as_str().is_some());
    assert_eq!(body["data"]["user"]["username"], "reader");
}

#[tokio::test]
async fn registration_rejects_duplicates_and_weak_input() {
    let app = TestApp::new().await;
    app.register_user("reader", "reader@example.com").await;

    let (status, body) = app
        .post(
            "/api/user/register",
            None,
            json!({ "username": "again", "email": "reader@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User already exists");

    let (status, body) = app
        .post(
            "/api/user/register",
            None,
            json!({ "username": "weak", "email": "weak@example.com", "password": "password" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");

    let (status, _) = app
        .post(
            "/api/user/register",
            None,
            json!({ "username": "bad", "email": "not-an-email", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_failures_are_unauthorized() {
    let app = TestApp::new().await;
    app.register_user("reader", "reader@example.com").await;

    let (status, body) = app
        .post(
            "/api/user/login",
            None,
            json!({ "email": "reader@example.com", "password": "Wrong1234" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = app
        .post(
            "/api/user/login",
            None,
            json!({ "email": "nobody@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post("/api/user/login", None, json!({ "email": "reader@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/user/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, token missing");

    let (status, _) = app.get("/api/user/me", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_and_admin_tokens_are_not_interchangeable() {
    let app = TestApp::new().await;
    let user_token = app.register_user("reader", "reader@example.com").await;
    let admin_token = app.register_admin("Boss", "boss@example.com").await;

    let (status, _) = app.get("/api/admin/activity", Some(&user_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/user/me", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/admin/activity", Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn google_login_creates_a_passwordless_account_once() {
    let app = TestApp::new().await;
    app.harness
        .identity
        .register("firebase-token", "uid-1", "gina@example.com", Some("Gina"));

    let (status, body) = app
        .post(
            "/api/user/google-login",
            None,
            json!({ "token": "firebase-token" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], "Gina");

    let (status, _) = app
        .post(
            "/api/user/google-login",
            None,
            json!({ "token": "firebase-token" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let users = app.harness.db.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].firebase_uid.as_deref(), Some("uid-1"));
    assert!(users[0].password.is_none());

    let (status, _) = app
        .post(
            "/api/user/login",
            None,
            json!({ "email": "gina@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post("/api/user/google-login", None, json!({ "token": "forged" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_registration_can_be_disabled() {
    let app = TestApp::with_options(TestOptions {
        allow_admin_registration: false,
        ..TestOptions::default()
    })
    .await;

    let (status, body) = app
        .post(
            "/api/admin/register",
            None,
            json!({ "name": "Boss", "email": "boss@example.com", "password": PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin registration is disabled");
}

#[tokio::test]
async fn disabled_admins_cannot_log_in_or_use_tokens() {
    let app = TestApp::new().await;
    let token = app.register_admin("Boss", "boss@example.com").await;

    let admin_id = {
        let (_, body) = app
            .post(
                "/api/admin/login",
                None,
                json!({ "email": "boss@example.com", "password": PASSWORD }),
            )
            .await;
        body["data"]["admin"]["id"].as_i64().unwrap() as i32
    };

    app.harness.db.set_admin_active(admin_id, false);

    let (status, body) = app
        .post(
            "/api/admin/login",
            None,
            json!({ "email": "boss@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Account is disabled");

    let (status, _) = app.get("/api/admin/activity", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn metrics_endpoint_exposes_request_counters() {
    let app = TestApp::new().await;
    app.get("/", None).await;

    let (status, body) = app.get("/metrics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("http_requests_total"));
}
