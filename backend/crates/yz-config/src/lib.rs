mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const MIN_MAX_BODY_BYTES: usize = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const DEFAULT_SESSION_EXPIRES_IN: &str = "7d";
const MIN_SECRET_LENGTH: usize = 32;
const MAX_SESSION_TTL: std::time::Duration = std::time::Duration::from_secs(365 * 24 * 60 * 60);
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
