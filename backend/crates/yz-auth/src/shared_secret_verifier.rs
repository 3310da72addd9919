use crate::{AuthError, FirebaseClaims, IdentityVerifier, Result as AuthErrorResult};

use yz_core::IdentityClaims;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies identity tokens signed with a shared HS256 secret.
///
/// Same claim layout as Firebase ID tokens; for local development and tests
/// where no Google-signed token is available.
pub struct SharedSecretVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SharedSecretVerifier {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<IdentityClaims> {
        let token_data = decode::<FirebaseClaims>(token, &self.decoding_key, &self.validation)
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

        token_data.claims.validate(chrono::Utc::now().timestamp())?;

        Ok(token_data.claims.into_identity())
    }

    fn algorithm(&self) -> &'static str {
        "HS256"
    }
}
