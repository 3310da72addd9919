use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

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

/// Inserts a row the way records looked before timestamps were tracked
pub async fn insert_legacy_user(pool: &SqlitePool, firebase_uid: &str, provider: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string();

    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query(
        "INSERT INTO users (id, firebase_uid, email, provider) VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(firebase_uid)
    .bind(format!("{}@example.com", firebase_uid))
    .bind(provider)
    .execute(pool)
    .await
    .expect("Failed to insert legacy user");

    id
}
