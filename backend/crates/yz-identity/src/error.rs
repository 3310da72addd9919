use yz_auth::AuthError;
use yz_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Authentication failed: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("User not found: {firebase_uid} {location}")]
    NotFound {
        firebase_uid: String,
        location: ErrorLocation,
    },

    #[error("Persistence failed: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn not_found(firebase_uid: impl Into<String>) -> Self {
        Self::NotFound {
            firebase_uid: firebase_uid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
