use yz_core::ProfileUpdate;

use serde::Deserialize;

/// Both fields are optional; an omitted field is cleared.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate::new(request.display_name, request.photo_url)
    }
}
