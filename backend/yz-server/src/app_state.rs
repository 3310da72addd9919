use crate::error::Result as ServerErrorResult;

use yz_auth::{
    FirebaseVerifier, IdentityVerifier, JwksKeyStore, SessionIssuer, SharedSecretVerifier,
};
use yz_config::AuthConfig;
use yz_db::UserRepository;
use yz_identity::{IdentitySync, ProfileService};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;

/// Shared state handed to every handler (cloned per request)
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub identity: IdentitySync,
    pub profiles: ProfileService,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        verifier: Arc<dyn IdentityVerifier>,
        sessions: Option<Arc<SessionIssuer>>,
    ) -> Self {
        let users = UserRepository::new(pool.clone());
        Self {
            identity: IdentitySync::new(verifier, users.clone(), sessions),
            profiles: ProfileService::new(users),
            pool,
        }
    }

    /// Wire verifier and session issuer from validated auth config
    pub fn from_config(pool: SqlitePool, auth: &AuthConfig) -> ServerErrorResult<Self> {
        let verifier = build_verifier(auth)?;
        let sessions = build_session_issuer(auth)?;
        Ok(Self::new(pool, verifier, sessions))
    }
}

pub fn build_verifier(auth: &AuthConfig) -> ServerErrorResult<Arc<dyn IdentityVerifier>> {
    let verifier: Arc<dyn IdentityVerifier> = match (&auth.firebase_project_id, &auth.identity_secret)
    {
        (Some(project_id), _) => {
            let keys = JwksKeyStore::new(auth.jwks_url.clone())?;
            info!("Identity: Firebase project '{}' (keys from {})", project_id, keys.jwks_url());
            Arc::new(FirebaseVerifier::new(project_id.clone(), keys))
        }
        (None, Some(secret)) => {
            warn!("Identity: shared-secret verification, not for production");
            Arc::new(SharedSecretVerifier::with_hs256(secret.as_bytes()))
        }
        (None, None) => {
            return Err(yz_config::ConfigError::auth(
                "one of auth.firebase_project_id or auth.identity_secret must be set",
            )
            .into());
        }
    };

    info!("Identity tokens verified with {}", verifier.algorithm());

    Ok(verifier)
}

pub fn build_session_issuer(auth: &AuthConfig) -> ServerErrorResult<Option<Arc<SessionIssuer>>> {
    match auth.session_secret {
        Some(ref secret) => {
            let ttl = auth.session_ttl()?;
            info!(
                "Session tokens: HS256, expire after {}",
                humantime::format_duration(ttl)
            );
            Ok(Some(Arc::new(SessionIssuer::with_hs256(secret.as_bytes(), ttl))))
        }
        None => {
            warn!("auth.session_secret not set; /auth/register will not return session tokens");
            Ok(None)
        }
    }
}
