//! First-login provisioning and per-login refresh of the local user record.

use crate::{IdentityError, Result as IdentityErrorResult};

use yz_auth::{AuthError, IdentityVerifier, SessionIssuer};
use yz_core::UserRecord;
use yz_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, info, warn};

/// Result of a successful login sync
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub profile: UserRecord,
    /// Present only when session signing is configured
    pub session_token: Option<String>,
    /// True when this login created the record
    pub created: bool,
}

#[derive(Clone)]
pub struct IdentitySync {
    verifier: Arc<dyn IdentityVerifier>,
    users: UserRepository,
    sessions: Option<Arc<SessionIssuer>>,
}

impl IdentitySync {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        users: UserRepository,
        sessions: Option<Arc<SessionIssuer>>,
    ) -> Self {
        Self {
            verifier,
            users,
            sessions,
        }
    }

    pub fn verifier(&self) -> &Arc<dyn IdentityVerifier> {
        &self.verifier
    }

    /// Verify `token` and create or refresh the caller's record.
    ///
    /// A rejected token never touches the store. Calling again with a token
    /// for the same subject only advances `last_login_at`.
    pub async fn sync_login(&self, token: &str) -> IdentityErrorResult<SyncOutcome> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        let claims = self.verifier.verify(token).await.inspect_err(|e| {
            warn!("Identity token rejected: {}", e);
        })?;

        let now = Utc::now();

        let (profile, created) = match self.users.find_by_firebase_uid(&claims.external_id).await? {
            Some(existing) => (self.refresh_login(existing, now).await?, false),
            None => {
                let record = UserRecord::from_claims(&claims, now);
                match self.users.insert(&record).await {
                    Ok(()) => {
                        info!(
                            "Created user {} for {} ({})",
                            record.id,
                            record.firebase_uid,
                            record.provider
                        );
                        (record, true)
                    }
                    Err(e) if e.is_unique_violation() => {
                        // Lost a first-login race; the winner's row is authoritative
                        debug!(
                            "Concurrent first login for {}, retrying as update",
                            claims.external_id
                        );
                        let existing = self
                            .users
                            .find_by_firebase_uid(&claims.external_id)
                            .await?
                            .ok_or(e)?;
                        (self.refresh_login(existing, now).await?, false)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let session_token = match self.sessions {
            Some(ref issuer) => Some(issuer.issue(&profile)?),
            None => None,
        };

        Ok(SyncOutcome {
            profile,
            session_token,
            created,
        })
    }

    /// Stamp the login in the store. Only the timestamp columns are
    /// written, so a profile edit racing with this login is kept.
    async fn refresh_login(
        &self,
        record: UserRecord,
        now: DateTime<Utc>,
    ) -> IdentityErrorResult<UserRecord> {
        if record.created_at.is_none() {
            info!("Repairing missing created_at for {}", record.firebase_uid);
        }

        let refreshed = self
            .users
            .record_login(record.id, now)
            .await?
            .ok_or_else(|| IdentityError::not_found(&record.firebase_uid))?;

        info!("Login sync for {} ({})", refreshed.firebase_uid, refreshed.id);

        Ok(refreshed)
    }
}
