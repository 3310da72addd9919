//! Lenient JSON body extractor

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// JSON request body where an empty body means `T::default()`.
///
/// The body is parsed whatever the `Content-Type`, so clients that post
/// nothing (or forget the header) get the same result as posting `{}`.
/// A non-empty body that is not valid JSON for `T` is a 400.
#[derive(Debug, Clone, Default)]
pub struct JsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(JsonOrDefault(T::default()));
            }

            serde_json::from_slice(&bytes).map(JsonOrDefault).map_err(|e| {
                ApiError::BadRequest {
                    message: format!("Invalid JSON body: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
                .into_response()
            })
        }
    }
}
