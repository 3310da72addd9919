use crate::UserRecordView;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserRecordView,
}
