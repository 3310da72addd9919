#![allow(dead_code)]

use yz_auth::{IdentityVerifier, SessionIssuer, SharedSecretVerifier};
use yz_db::UserRepository;
use yz_identity::IdentitySync;

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const IDENTITY_SECRET: &[u8] = b"identity-secret-at-least-32-bytes!!";
pub const SESSION_SECRET: &[u8] = b"session-secret-at-least-32-bytes!!!";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    yz_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn verifier() -> Arc<dyn IdentityVerifier> {
    Arc::new(SharedSecretVerifier::with_hs256(IDENTITY_SECRET))
}

pub fn session_issuer() -> Arc<SessionIssuer> {
    Arc::new(SessionIssuer::with_hs256(
        SESSION_SECRET,
        Duration::from_secs(7 * 24 * 60 * 60),
    ))
}

pub fn create_sync(pool: &SqlitePool) -> IdentitySync {
    IdentitySync::new(
        verifier(),
        UserRepository::new(pool.clone()),
        Some(session_issuer()),
    )
}

/// Mint an identity token shaped like a Firebase ID token
pub fn mint_token(uid: &str, name: &str, sign_in_provider: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "sub": uid,
        "email": format!("{}@example.com", uid),
        "name": name,
        "picture": "",
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

/// Inserts a row the way records looked before timestamps were tracked
pub async fn insert_legacy_user(pool: &SqlitePool, firebase_uid: &str, email: &str) {
    sqlx::query("INSERT INTO users (id, firebase_uid, email) VALUES (?, ?, ?)")
        .bind(Uuid::new_v4().to_string())
        .bind(firebase_uid)
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to insert legacy user");
}

/// Make every UPDATE of `firebase_uid` fail at the database
pub async fn fail_updates_for(pool: &SqlitePool, firebase_uid: &str) {
    let sql = format!(
        "CREATE TRIGGER fail_update_{uid} BEFORE UPDATE ON users \
         WHEN OLD.firebase_uid = '{uid}' \
         BEGIN SELECT RAISE(ABORT, 'update rejected'); END",
        uid = firebase_uid
    );
    sqlx::query(&sql)
        .execute(pool)
        .await
        .expect("Failed to create trigger");
}
