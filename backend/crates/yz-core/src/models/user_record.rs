//! Local mirror of a user known to the identity authority.

use crate::{IdentityClaims, Provider};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One record per external identity.
///
/// `created_at` and `last_login_at` are optional only because rows written
/// before the timestamps existed lack them; every record created through a
/// login sync carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    /// Subject id from the identity authority (unique, immutable)
    pub firebase_uid: String,
    pub email: String,
    pub display_name: String,
    pub photo_url: String,
    pub provider: Provider,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Build the record for a first login
    pub fn from_claims(claims: &IdentityClaims, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            firebase_uid: claims.external_id.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name.clone(),
            photo_url: claims.photo_url.clone(),
            provider: claims.provider,
            created_at: Some(now),
            last_login_at: Some(now),
        }
    }

    /// True when either timestamp is missing
    pub fn needs_backfill(&self) -> bool {
        self.created_at.is_none() || self.last_login_at.is_none()
    }
}
