use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No token provided {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Signing key '{kid}' not found {location}")]
    UnknownKeyId {
        kid: String,
        location: ErrorLocation,
    },

    #[error("Failed to fetch signing keys from {url}: {message} {location}")]
    KeyFetch {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session lifetime of {seconds}s is out of range {location}")]
    SessionLifetime { seconds: u64, location: ErrorLocation },

    #[error("Failed to sign session token: {source} {location}")]
    SessionSigning {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::SessionSigning { .. } | Self::SessionLifetime { .. } => "SESSION_SIGNING_FAILED",
            _ => "INVALID_TOKEN",
        }
    }

    /// True when the caller's credential was absent or rejected,
    /// as opposed to a failure on our side.
    pub fn is_credential_failure(&self) -> bool {
        !matches!(
            self,
            Self::SessionSigning { .. } | Self::SessionLifetime { .. }
        )
    }

    /// Client-safe message; never includes key material or claim values.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "No token provided",
            Self::TokenExpired { .. } => "Token expired",
            Self::SessionSigning { .. } | Self::SessionLifetime { .. } => "Authentication failed",
            _ => "Invalid token",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
