//! End-to-end tests over the full router, one in-memory state per test.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wfh_server::{router, AppState, ServerConfig};

fn test_app() -> Router {
    router(AppState::new(&ServerConfig {
        port: 0,
        jwt_secret: "test-secret".into(),
        token_expiry_hours: 24,
    }))
}

/// Issue one request; returns (status, parsed body, first Set-Cookie pair).
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value, Option<String>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body, cookie)
}

fn post_json(path: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    builder.body(Body::empty()).unwrap()
}

fn credentials(email: &str) -> Value {
    json!({ "email": email, "password": "hunter2" })
}

async fn signup(app: &Router, email: &str) -> String {
    let (status, _, cookie) =
        send(app, post_json("/api/auth/signup", &credentials(email), None)).await;
    assert_eq!(status, StatusCode::OK);
    cookie.expect("signup sets the token cookie")
}

fn sample_progress() -> Value {
    json!({
        "3": {
            "mornFlow": true,
            "neckBack": true,
            "wristsEyes": false,
            "lunchReset": false,
            "focusSigh": false,
            "shutDown": false,
            "painLevel": 4,
            "energyLevel": 7
        }
    })
}

#[tokio::test]
async fn signup_returns_user_and_sets_cookie() {
    let app = test_app();
    let (status, body, cookie) =
        send(&app, post_json("/api/auth/signup", &credentials("a@example.com"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "a@example.com");
    assert!(body["user"]["id"].is_string());
    assert!(cookie.unwrap().starts_with("token="));
}

#[tokio::test]
async fn signup_with_missing_fields_is_400() {
    let app = test_app();
    let (status, body, _) =
        send(&app, post_json("/api/auth/signup", &json!({ "email": "a@example.com" }), None))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing fields");
}

#[tokio::test]
async fn duplicate_signup_is_400() {
    let app = test_app();
    signup(&app, "a@example.com").await;
    let (status, body, _) =
        send(&app, post_json("/api/auth/signup", &credentials("a@example.com"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn login_round_trip() {
    let app = test_app();
    signup(&app, "a@example.com").await;
    let (status, body, cookie) =
        send(&app, post_json("/api/auth/login", &credentials("a@example.com"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "a@example.com");
    assert!(cookie.is_some());
}

#[tokio::test]
async fn login_with_bad_credentials_is_400() {
    let app = test_app();
    signup(&app, "a@example.com").await;

    let wrong_password = json!({ "email": "a@example.com", "password": "nope" });
    let (status, body, _) =
        send(&app, post_json("/api/auth/login", &wrong_password, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");

    // Unknown email gets the same message.
    let (status, body, _) =
        send(&app, post_json("/api/auth/login", &credentials("b@example.com"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn me_is_null_without_cookie_and_user_with_one() {
    let app = test_app();
    let (status, body, _) = send(&app, get("/api/auth/me", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["user"].is_null());

    let cookie = signup(&app, "a@example.com").await;
    let (status, body, _) = send(&app, get("/api/auth/me", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "a@example.com");

    // Garbage token degrades to null rather than failing.
    let (status, body, _) = send(&app, get("/api/auth/me", Some("token=garbage"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = test_app();
    let (status, body, cookie) =
        send(&app, post_json("/api/auth/logout", &json!({}), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");
    // Removal cookie has an empty value.
    assert_eq!(cookie.as_deref(), Some("token="));
}

#[tokio::test]
async fn progress_requires_auth() {
    let app = test_app();
    let (status, body, _) = send(&app, get("/api/progress", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, body, _) = send(&app, get("/api/progress", Some("token=garbage"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");
}

#[tokio::test]
async fn progress_round_trip() {
    let app = test_app();
    let cookie = signup(&app, "a@example.com").await;

    // Nothing saved yet: empty object.
    let (status, body, _) = send(&app, get("/api/progress", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body, _) = send(
        &app,
        post_json("/api/progress", &sample_progress(), Some(&cookie)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body, _) = send(&app, get("/api/progress", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, sample_progress());
}

#[tokio::test]
async fn progress_put_is_full_replacement() {
    let app = test_app();
    let cookie = signup(&app, "a@example.com").await;
    send(&app, post_json("/api/progress", &sample_progress(), Some(&cookie))).await;

    let replacement = json!({ "5": { "focusSigh": true, "painLevel": 2, "energyLevel": 8 } });
    send(&app, post_json("/api/progress", &replacement, Some(&cookie))).await;

    let (_, body, _) = send(&app, get("/api/progress", Some(&cookie))).await;
    assert!(body.get("3").is_none());
    assert_eq!(body["5"]["focusSigh"], true);
    // Omitted flags deserialize as false.
    assert_eq!(body["5"]["mornFlow"], false);
}

#[tokio::test]
async fn progress_rejects_invalid_snapshots() {
    let app = test_app();
    let cookie = signup(&app, "a@example.com").await;

    let bad_day = json!({ "22": { "mornFlow": true } });
    let (status, _, _) =
        send(&app, post_json("/api/progress", &bad_day, Some(&cookie))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_metric = json!({ "3": { "painLevel": 11 } });
    let (status, body, _) =
        send(&app, post_json("/api/progress", &bad_metric, Some(&cookie))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "painLevel for day 3 must be between 0 and 10, got 11");
}

#[tokio::test]
async fn progress_is_scoped_per_user() {
    let app = test_app();
    let alice = signup(&app, "alice@example.com").await;
    let bob = signup(&app, "bob@example.com").await;

    send(&app, post_json("/api/progress", &sample_progress(), Some(&alice))).await;

    let (_, body, _) = send(&app, get("/api/progress", Some(&bob))).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app();
    let (status, body, _) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
