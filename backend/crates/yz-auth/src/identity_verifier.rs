use crate::Result as AuthErrorResult;

use yz_core::IdentityClaims;

use async_trait::async_trait;

/// Validates a token issued by the external identity authority.
///
/// Implementations do a single check per call and never retry.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthErrorResult<IdentityClaims>;

    /// Algorithm label for startup logging
    fn algorithm(&self) -> &'static str;
}
