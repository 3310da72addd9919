use crate::{AuthError, Result as AuthErrorResult};

use yz_core::{IdentityClaims, Provider};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Firebase caps uids at 128 characters
const MAX_SUBJECT_LENGTH: usize = 128;
/// Clock skew tolerated on `iat`
const IAT_LEEWAY_SECS: i64 = 30;

/// Claims carried by a Firebase Authentication ID token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseClaims {
    /// Subject (Firebase uid)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub firebase: SignInInfo,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default)]
    pub aud: String,
    #[serde(default)]
    pub iss: String,
}

/// The `firebase` claim object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInInfo {
    #[serde(default)]
    pub sign_in_provider: Option<String>,
}

impl FirebaseClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self, now: i64) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.iat > now + IAT_LEEWAY_SECS {
            return Err(AuthError::InvalidClaim {
                claim: "iat".to_string(),
                message: "token issued in the future".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Reduce to the identity facts the store mirrors
    pub fn into_identity(self) -> IdentityClaims {
        IdentityClaims {
            provider: Provider::from_sign_in_provider(self.firebase.sign_in_provider.as_deref()),
            external_id: self.sub,
            email: self.email.unwrap_or_default(),
            display_name: self.name.unwrap_or_default(),
            photo_url: self.picture.unwrap_or_default(),
        }
    }
}
