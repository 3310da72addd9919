//! Signing keys published by the identity authority.
//!
//! Keys are fetched lazily and refetched when a token names a `kid` we have
//! not seen, at most once per cooldown window.

use crate::{AuthError, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::DecodingKey;
use log::{debug, info, warn};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    #[serde(default)]
    n: String,
    #[serde(default)]
    e: String,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

pub struct JwksKeyStore {
    jwks_url: String,
    client: reqwest::Client,
    keys: RwLock<HashMap<String, DecodingKey>>,
    last_refresh: Mutex<Option<Instant>>,
    refresh_cooldown: Duration,
}

impl JwksKeyStore {
    #[track_caller]
    pub fn new(jwks_url: impl Into<String>) -> AuthErrorResult<Self> {
        let jwks_url = jwks_url.into();
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| AuthError::KeyFetch {
                url: jwks_url.clone(),
                message: format!("failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            jwks_url,
            client,
            keys: RwLock::new(HashMap::new()),
            last_refresh: Mutex::new(None),
            refresh_cooldown: DEFAULT_REFRESH_COOLDOWN,
        })
    }

    /// Minimum gap between two fetches triggered by unknown key ids
    pub fn with_refresh_cooldown(mut self, cooldown: Duration) -> Self {
        self.refresh_cooldown = cooldown;
        self
    }

    pub fn jwks_url(&self) -> &str {
        &self.jwks_url
    }

    /// Look up a decoding key, refetching the key set if `kid` is unknown
    pub async fn key(&self, kid: &str) -> AuthErrorResult<DecodingKey> {
        if let Some(key) = self.keys.read().await.get(kid) {
            return Ok(key.clone());
        }

        self.refresh().await?;

        self.keys
            .read()
            .await
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownKeyId {
                kid: kid.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn refresh(&self) -> AuthErrorResult<()> {
        // Held across the fetch so concurrent misses trigger one request
        let mut last_refresh = self.last_refresh.lock().await;

        if let Some(at) = *last_refresh
            && at.elapsed() < self.refresh_cooldown
        {
            debug!("Signing key refresh throttled (cooldown active)");
            return Ok(());
        }

        let keys = self.fetch().await?;
        info!(
            "Loaded {} signing keys from {}",
            keys.len(),
            self.jwks_url
        );

        *self.keys.write().await = keys;
        *last_refresh = Some(Instant::now());

        Ok(())
    }

    async fn fetch(&self) -> AuthErrorResult<HashMap<String, DecodingKey>> {
        let key_fetch_error = |message: String| AuthError::KeyFetch {
            url: self.jwks_url.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let jwks: JwkSet = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| key_fetch_error(e.to_string()))?
            .json()
            .await
            .map_err(|e| key_fetch_error(format!("malformed key set: {}", e)))?;

        let mut keys = HashMap::new();
        for jwk in jwks.keys {
            if jwk.kty != "RSA" {
                continue;
            }
            match DecodingKey::from_rsa_components(&jwk.n, &jwk.e) {
                Ok(key) => {
                    keys.insert(jwk.kid, key);
                }
                Err(e) => warn!("Skipping unusable signing key {}: {}", jwk.kid, e),
            }
        }

        if keys.is_empty() {
            return Err(key_fetch_error("no RSA keys in key set".to_string()));
        }

        Ok(keys)
    }
}
