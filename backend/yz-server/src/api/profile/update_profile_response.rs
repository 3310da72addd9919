use crate::UserRecordView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: UserRecordView,
}
