use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] yz_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] yz_auth::AuthError),

    #[error("Database error: {0}")]
    Database(#[from] yz_db::DbError),

    #[error("Identity error: {0}")]
    Identity(#[from] yz_identity::IdentityError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
