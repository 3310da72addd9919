pub mod bearer;
pub mod error;
pub mod firebase_claims;
pub mod firebase_verifier;
pub mod identity_verifier;
pub mod jwks_key_store;
pub mod session_claims;
pub mod session_issuer;
pub mod shared_secret_verifier;

pub use bearer::bearer_token;
pub use error::{AuthError, Result};
pub use firebase_claims::{FirebaseClaims, SignInInfo};
pub use firebase_verifier::FirebaseVerifier;
pub use identity_verifier::IdentityVerifier;
pub use jwks_key_store::JwksKeyStore;
pub use session_claims::SessionClaims;
pub use session_issuer::SessionIssuer;
pub use shared_secret_verifier::SharedSecretVerifier;

#[cfg(test)]
mod tests;
