use crate::{IdentityClaims, Provider, UserRecord};

use chrono::Utc;
use googletest::prelude::*;

fn claims() -> IdentityClaims {
    IdentityClaims {
        external_id: "abc".to_string(),
        email: "a@b.com".to_string(),
        display_name: "A".to_string(),
        photo_url: String::new(),
        provider: Provider::Google,
    }
}

#[test]
fn given_claims_when_from_claims_then_both_timestamps_equal_now() {
    let now = Utc::now();

    let record = UserRecord::from_claims(&claims(), now);

    assert_that!(record.firebase_uid.as_str(), eq("abc"));
    assert_that!(record.display_name.as_str(), eq("A"));
    assert_that!(record.provider, eq(Provider::Google));
    assert_that!(record.created_at, some(eq(now)));
    assert_that!(record.last_login_at, some(eq(now)));
}

#[test]
fn given_fresh_record_when_checked_then_no_backfill_needed() {
    let record = UserRecord::from_claims(&claims(), Utc::now());

    assert_that!(record.needs_backfill(), eq(false));
}

#[test]
fn given_record_missing_either_timestamp_when_checked_then_needs_backfill() {
    let mut no_created = UserRecord::from_claims(&claims(), Utc::now());
    no_created.created_at = None;
    let mut no_login = UserRecord::from_claims(&claims(), Utc::now());
    no_login.last_login_at = None;

    assert_that!(no_created.needs_backfill(), eq(true));
    assert_that!(no_login.needs_backfill(), eq(true));
}
