use crate::UserRecordView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserRecordView,
    /// Session token; omitted when session signing is not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
