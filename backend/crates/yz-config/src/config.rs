use crate::{AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "YZ_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".yz";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for YZ_CONFIG_DIR env var, else use ./.yz/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: YZ_CONFIG_DIR env var > ./.yz/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (body limit {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: identity={}, sessions={} (expires in {})",
            self.auth.identity_mode(),
            if self.auth.session_secret.is_some() {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.session_expires_in
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("YZ_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("YZ_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("YZ_SERVER_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Database
        Self::apply_env_string("YZ_DATABASE_PATH", &mut self.database.path);

        // Auth (JWT_SECRET / JWT_EXPIRES_IN kept for existing deployments; YZ_* wins)
        Self::apply_env_option_string(
            "YZ_AUTH_FIREBASE_PROJECT_ID",
            &mut self.auth.firebase_project_id,
        );
        Self::apply_env_string("YZ_AUTH_JWKS_URL", &mut self.auth.jwks_url);
        Self::apply_env_option_string("YZ_AUTH_IDENTITY_SECRET", &mut self.auth.identity_secret);
        Self::apply_env_option_string("JWT_SECRET", &mut self.auth.session_secret);
        Self::apply_env_option_string("YZ_AUTH_SESSION_SECRET", &mut self.auth.session_secret);
        Self::apply_env_string("JWT_EXPIRES_IN", &mut self.auth.session_expires_in);
        Self::apply_env_string(
            "YZ_AUTH_SESSION_EXPIRES_IN",
            &mut self.auth.session_expires_in,
        );

        // Logging
        Self::apply_env_parse("YZ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("YZ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("YZ_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
