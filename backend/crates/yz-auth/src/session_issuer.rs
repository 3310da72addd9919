use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use yz_core::UserRecord;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and validates HS256 session tokens for synced users
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a session token for `record`
    #[track_caller]
    pub fn issue(&self, record: &UserRecord) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| AuthError::SessionLifetime {
                seconds: self.ttl.as_secs(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = SessionClaims {
            sub: record.id.to_string(),
            firebase_uid: record.firebase_uid.clone(),
            email: record.email.clone(),
            iat: now,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::SessionSigning {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a session token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }
}
