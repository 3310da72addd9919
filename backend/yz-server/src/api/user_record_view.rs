use yz_core::UserRecord;

use serde::Serialize;

/// Client-facing view of a user record.
///
/// Timestamps are RFC 3339 strings, or `null` on rows that predate them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordView {
    pub id: String,
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub provider: String,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

impl From<UserRecord> for UserRecordView {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            firebase_uid: record.firebase_uid,
            email: record.email,
            display_name: record.display_name,
            photo_url: record.photo_url,
            provider: record.provider.as_str().to_string(),
            created_at: record.created_at.map(|dt| dt.to_rfc3339()),
            last_login_at: record.last_login_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
