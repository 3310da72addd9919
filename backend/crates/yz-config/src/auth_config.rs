use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_JWKS_URL, DEFAULT_SESSION_EXPIRES_IN,
    MAX_SESSION_TTL, MIN_SECRET_LENGTH,
};

use std::time::Duration;

use serde::Deserialize;

/// Identity verification and session token settings.
///
/// Exactly one identity source must be configured: a Firebase project id
/// (RS256 tokens checked against Google's published keys) or a shared
/// HS256 secret for local development.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub firebase_project_id: Option<String>,
    pub jwks_url: String,
    pub identity_secret: Option<String>,
    /// Signs session tokens; sessions are not issued when unset
    pub session_secret: Option<String>,
    /// humantime duration, e.g. "7d" or "12h"
    pub session_expires_in: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            firebase_project_id: None,
            jwks_url: String::from(DEFAULT_JWKS_URL),
            identity_secret: None,
            session_secret: None,
            session_expires_in: String::from(DEFAULT_SESSION_EXPIRES_IN),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (&self.firebase_project_id, &self.identity_secret) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "one of auth.firebase_project_id or auth.identity_secret must be set",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "auth.firebase_project_id and auth.identity_secret are mutually exclusive",
                ));
            }
            (Some(project_id), None) => {
                if project_id.trim().is_empty() {
                    return Err(ConfigError::auth("auth.firebase_project_id cannot be empty"));
                }
                if !self.jwks_url.starts_with("http://") && !self.jwks_url.starts_with("https://")
                {
                    return Err(ConfigError::auth(format!(
                        "auth.jwks_url must be an http(s) URL, got '{}'",
                        self.jwks_url
                    )));
                }
            }
            (None, Some(secret)) => Self::validate_secret("auth.identity_secret", secret)?,
        }

        if let Some(ref secret) = self.session_secret {
            Self::validate_secret("auth.session_secret", secret)?;
        }

        self.session_ttl()?;

        Ok(())
    }

    /// Parsed session lifetime, at most one year
    pub fn session_ttl(&self) -> ConfigErrorResult<Duration> {
        let ttl = humantime::parse_duration(&self.session_expires_in).map_err(|e| {
            ConfigError::auth(format!(
                "auth.session_expires_in '{}' is not a valid duration: {}",
                self.session_expires_in, e
            ))
        })?;

        if ttl.is_zero() {
            return Err(ConfigError::auth("auth.session_expires_in must be > 0"));
        }

        if ttl > MAX_SESSION_TTL {
            return Err(ConfigError::auth(format!(
                "auth.session_expires_in '{}' exceeds the maximum of {}",
                self.session_expires_in,
                humantime::format_duration(MAX_SESSION_TTL)
            )));
        }

        Ok(ttl)
    }

    /// Short label for startup logging
    pub fn identity_mode(&self) -> &'static str {
        if self.firebase_project_id.is_some() {
            "firebase (RS256)"
        } else if self.identity_secret.is_some() {
            "shared secret (HS256)"
        } else {
            "none"
        }
    }

    fn validate_secret(name: &str, secret: &str) -> ConfigErrorResult<()> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "{} must be at least {} characters",
                name, MIN_SECRET_LENGTH
            )));
        }
        Ok(())
    }
}
