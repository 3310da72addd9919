use crate::{AuthError, FirebaseClaims, IdentityVerifier, JwksKeyStore, Result as AuthErrorResult};

use yz_core::IdentityClaims;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Verifies Firebase Authentication ID tokens (RS256).
///
/// Checks signature against the published key set, expiry, audience
/// (project id) and issuer.
pub struct FirebaseVerifier {
    keys: JwksKeyStore,
    validation: Validation,
}

impl FirebaseVerifier {
    pub fn new(project_id: impl Into<String>, keys: JwksKeyStore) -> Self {
        let project_id = project_id.into();

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_audience(&[project_id.as_str()]);
        validation.set_issuer(&[format!("{}{}", ISSUER_PREFIX, project_id)]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        Self {
            keys,
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<IdentityClaims> {
        let header = decode_header(token).map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::InvalidToken {
                message: format!("unexpected algorithm {:?}", header.alg),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let kid = header.kid.ok_or_else(|| AuthError::InvalidToken {
            message: "token header has no kid".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let key = self.keys.key(&kid).await?;

        let token_data =
            decode::<FirebaseClaims>(token, &key, &self.validation).map_err(|e| {
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
        "RS256"
    }
}
