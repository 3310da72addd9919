use crate::{ApiResult, AppState, JsonOrDefault, RegisterRequest, RegisterResponse};

use axum::{Json, extract::State};

/// POST /auth/register
///
/// Verify the identity token, then create the caller's record on first
/// login or stamp the login on an existing one. Every failure, including a
/// missing or rejected token, is a 500 "Authentication failed".
pub async fn register(
    State(state): State<AppState>,
    JsonOrDefault(request): JsonOrDefault<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let token = request.id_token.unwrap_or_default();

    let outcome = state
        .identity
        .sync_login(&token)
        .await
        .map_err(|e| crate::ApiError::from(e).into_internal("Authentication failed"))?;

    Ok(Json(RegisterResponse {
        message: "User authenticated successfully".to_string(),
        user: outcome.profile.into(),
        token: outcome.session_token,
    }))
}
