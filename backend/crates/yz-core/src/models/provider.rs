use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sign-in method recorded when a user is first mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Email and password account
    #[default]
    Password,
    /// Google federated sign-in
    Google,
}

impl Provider {
    /// Sign-in method value Firebase reports for Google accounts
    pub const GOOGLE_SIGN_IN_PROVIDER: &'static str = "google.com";

    /// Map the `firebase.sign_in_provider` claim onto a provider.
    /// Anything other than Google counts as a password account.
    pub fn from_sign_in_provider(sign_in_provider: Option<&str>) -> Self {
        match sign_in_provider {
            Some(Self::GOOGLE_SIGN_IN_PROVIDER) => Self::Google,
            _ => Self::Password,
        }
    }

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google",
        }
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            // Older rows stored password accounts as "email"
            "password" | "email" => Ok(Self::Password),
            "google" => Ok(Self::Google),
            _ => Err(CoreError::InvalidProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
