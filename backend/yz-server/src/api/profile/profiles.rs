//! Profile REST API handlers
//!
//! Both handlers act on the record of the authenticated caller only.

use crate::{
    ApiResult, AppState, Caller, JsonOrDefault, ProfileResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};

use axum::{Json, extract::State};

/// GET /auth/profile
pub async fn get_profile(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<ProfileResponse>> {
    let record = state
        .profiles
        .get_profile(&caller.firebase_uid)
        .await
        .map_err(|e| crate::ApiError::from(e).with_internal_message("Failed to fetch profile"))?;

    Ok(Json(ProfileResponse {
        user: record.into(),
    }))
}

/// PUT /auth/profile
///
/// Overwrites displayName and photoURL; a field left out of the body is
/// cleared to "". An empty body clears both.
pub async fn update_profile(
    State(state): State<AppState>,
    caller: Caller,
    JsonOrDefault(request): JsonOrDefault<UpdateProfileRequest>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let record = state
        .profiles
        .update_profile(&caller.firebase_uid, request.into())
        .await
        .map_err(|e| crate::ApiError::from(e).with_internal_message("Failed to update profile"))?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: record.into(),
    }))
}
