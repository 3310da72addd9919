//! Bearer-token authentication for profile endpoints

use crate::{ApiError, AppState};

use yz_auth::bearer_token;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified subject of the request's `Authorization: Bearer` token.
///
/// Rejects with 401 when the header is missing or the token fails
/// verification.
#[derive(Debug, Clone)]
pub struct Caller {
    pub firebase_uid: String,
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;
            let claims = state.identity.verifier().verify(token).await?;

            log::debug!("Authenticated caller {}", claims.external_id);

            Ok(Caller {
                firebase_uid: claims.external_id,
            })
        }
    }
}
