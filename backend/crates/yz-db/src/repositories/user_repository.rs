//! User record repository.
//!
//! `firebase_uid` carries a UNIQUE index, so a second insert for the same
//! identity fails with `DbError::UniqueViolation` rather than creating a
//! duplicate. Callers racing on first login re-read and record a login instead.

use crate::{DbError, Result as DbErrorResult};

use yz_core::{Provider, UserRecord};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, firebase_uid, email, display_name, photo_url, provider, created_at, last_login_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, record: &UserRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, firebase_uid, email, display_name, photo_url, provider,
                    created_at, last_login_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.firebase_uid)
        .bind(&record.email)
        .bind(&record.display_name)
        .bind(&record.photo_url)
        .bind(record.provider.as_str())
        .bind(record.created_at.map(|dt| dt.timestamp_millis()))
        .bind(record.last_login_at.map(|dt| dt.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Stamp a login on an existing record, filling a missing `created_at`
    /// with the same instant. Only the timestamp columns are written, so a
    /// concurrent profile edit is never overwritten. `None` when no record
    /// has this id.
    pub async fn record_login(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<UserRecord>> {
        let millis = now.timestamp_millis();
        let sql = format!(
            r#"
                UPDATE users
                SET created_at = COALESCE(created_at, ?),
                    last_login_at = MAX(?, COALESCE(created_at, ?))
                WHERE id = ?
                RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(millis)
            .bind(millis)
            .bind(millis)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Fill whichever timestamp is NULL, keeping `created_at <= last_login_at`.
    /// Present values are left alone.
    pub async fn fill_missing_timestamps(&self, id: Uuid, now: DateTime<Utc>) -> DbErrorResult<()> {
        let millis = now.timestamp_millis();
        let result = sqlx::query(
            r#"
                UPDATE users
                SET created_at = COALESCE(created_at, MIN(?, COALESCE(last_login_at, ?))),
                    last_login_at = COALESCE(last_login_at, MAX(?, COALESCE(created_at, ?)))
                WHERE id = ?
            "#,
        )
        .bind(millis)
        .bind(millis)
        .bind(millis)
        .bind(millis)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RecordNotFound {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    pub async fn find_by_firebase_uid(&self, firebase_uid: &str) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!("SELECT {} FROM users WHERE firebase_uid = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(firebase_uid)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Overwrite the owner-editable fields, returning the updated record,
    /// or `None` when no record exists for `firebase_uid`.
    pub async fn update_profile(
        &self,
        firebase_uid: &str,
        display_name: &str,
        photo_url: &str,
    ) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!(
            "UPDATE users SET display_name = ?, photo_url = ? WHERE firebase_uid = ? RETURNING {}",
            USER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(display_name)
            .bind(photo_url)
            .bind(firebase_uid)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Records predating the timestamp columns (either one NULL)
    pub async fn find_missing_timestamps(&self) -> DbErrorResult<Vec<UserRecord>> {
        let sql = format!(
            "SELECT {} FROM users WHERE created_at IS NULL OR last_login_at IS NULL ORDER BY rowid",
            USER_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<UserRecord> {
    let id: String = row.try_get("id")?;
    let provider: String = row.try_get("provider")?;
    let created_at: Option<i64> = row.try_get("created_at")?;
    let last_login_at: Option<i64> = row.try_get("last_login_at")?;

    Ok(UserRecord {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Corrupt {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        firebase_uid: row.try_get("firebase_uid")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        photo_url: row.try_get("photo_url")?,
        provider: Provider::from_str(&provider).map_err(|e| DbError::Corrupt {
            message: format!("Invalid provider in users.provider: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: created_at
            .map(|ms| timestamp("users.created_at", ms))
            .transpose()?,
        last_login_at: last_login_at
            .map(|ms| timestamp("users.last_login_at", ms))
            .transpose()?,
    })
}

#[track_caller]
fn timestamp(column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Corrupt {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
