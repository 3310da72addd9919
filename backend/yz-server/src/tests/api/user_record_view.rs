use crate::UserRecordView;

use yz_core::{Provider, UserRecord};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn record() -> UserRecord {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    UserRecord {
        id: Uuid::nil(),
        firebase_uid: "abc".into(),
        email: "a@b.com".into(),
        display_name: "A".into(),
        photo_url: "".into(),
        provider: Provider::Google,
        created_at: Some(at),
        last_login_at: Some(at),
    }
}

#[test]
fn given_record_when_serialized_then_uses_client_field_names() {
    // When
    let json = serde_json::to_value(UserRecordView::from(record())).unwrap();

    // Then
    assert_that!(json["firebaseUid"].as_str(), some(eq("abc")));
    assert_that!(json["displayName"].as_str(), some(eq("A")));
    assert_that!(json["photoURL"].as_str(), some(eq("")));
    assert_that!(json["provider"].as_str(), some(eq("google")));
    assert_that!(
        json["createdAt"].as_str(),
        some(eq("2026-10-18T09:30:00+00:00"))
    );
}

#[test]
fn given_legacy_record_when_serialized_then_timestamps_are_null() {
    // Given
    let mut legacy = record();
    legacy.created_at = None;
    legacy.last_login_at = None;

    // When
    let json = serde_json::to_value(UserRecordView::from(legacy)).unwrap();

    // Then
    assert_that!(json["createdAt"].is_null(), eq(true));
    assert_that!(json["lastLoginAt"].is_null(), eq(true));
}
