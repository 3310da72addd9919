use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;
use http::header::AUTHORIZATION;

const BEARER_SCHEME: &str = "Bearer";

/// Pull the bearer token out of the `Authorization` header.
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme or an empty token all count as "no token provided".
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<&str> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.trim_start().split_once(char::is_whitespace))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        .map(|(_, token)| token.trim())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
