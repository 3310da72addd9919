use crate::Provider;

use serde::{Deserialize, Serialize};

/// Identity facts extracted from a verified token.
///
/// Produced by the credential verifier; the identity authority is trusted
/// for every field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Stable subject id issued by the identity authority
    pub external_id: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: String,
    pub provider: Provider,
}
