#![allow(dead_code)]

//! Test infrastructure for yz-server API tests

use yz_auth::{SessionIssuer, SharedSecretVerifier};
use yz_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const IDENTITY_SECRET: &[u8] = b"identity-secret-at-least-32-bytes!!";
pub const SESSION_SECRET: &[u8] = b"session-secret-at-least-32-bytes!!!";
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    yz_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (HS256 identity tokens, sessions enabled)
pub async fn create_test_app_state() -> AppState {
    AppState::new(
        create_test_pool().await,
        Arc::new(SharedSecretVerifier::with_hs256(IDENTITY_SECRET)),
        Some(Arc::new(SessionIssuer::with_hs256(
            SESSION_SECRET,
            Duration::from_secs(7 * 24 * 60 * 60),
        ))),
    )
}

pub fn create_test_router(state: AppState) -> Router {
    build_router(state, MAX_BODY_BYTES)
}

/// Mint an identity token shaped like a Firebase ID token
pub fn mint_token(uid: &str, name: &str, picture: &str, sign_in_provider: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": uid,
        "email": "a@b.com",
        "name": name,
        "picture": picture,
        "firebase": { "sign_in_provider": sign_in_provider },
        "iat": now,
        "exp": now + 3600,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(IDENTITY_SECRET),
    )
    .expect("Failed to mint token")
}

pub fn register_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_profile_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/auth/profile");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_profile_request(token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/auth/profile")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON body (Null when not JSON)
pub async fn send(app: &Router, request: Request<Body>) -> (http::StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Make every INSERT and UPDATE on `users` fail at the database
pub async fn fail_user_writes(pool: &SqlitePool) {
    for (name, event) in [("fail_insert", "INSERT"), ("fail_update", "UPDATE")] {
        let sql = format!(
            "CREATE TRIGGER {name} BEFORE {event} ON users \
             BEGIN SELECT RAISE(ABORT, 'write rejected'); END"
        );
        sqlx::query(&sql)
            .execute(pool)
            .await
            .expect("Failed to create trigger");
    }
}
