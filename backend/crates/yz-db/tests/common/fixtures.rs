use chrono::{DateTime, Duration, Utc};
use yz_core::{IdentityClaims, Provider, UserRecord};

pub fn create_test_claims(firebase_uid: &str) -> IdentityClaims {
    IdentityClaims {
        external_id: firebase_uid.to_string(),
        email: format!("{}@example.com", firebase_uid),
        display_name: "Test User".to_string(),
        photo_url: "https://example.com/photo.png".to_string(),
        provider: Provider::Google,
    }
}

/// Creates a test UserRecord as a first login at `now`
pub fn create_test_user(firebase_uid: &str) -> UserRecord {
    UserRecord::from_claims(&create_test_claims(firebase_uid), fixed_now())
}

/// Millisecond-aligned instant so stored values compare equal after a round trip
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap_or_else(Utc::now)
}

pub fn minutes_later(from: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    from + Duration::minutes(minutes)
}
