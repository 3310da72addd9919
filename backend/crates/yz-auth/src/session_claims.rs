use serde::{Deserialize, Serialize};

/// Claims embedded in the locally signed session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (local user record id)
    pub sub: String,
    pub firebase_uid: String,
    pub email: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}
