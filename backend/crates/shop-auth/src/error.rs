use std::panic::Location;

use error_location::ErrorLocation;
use shop_core::Role;
use shop_db::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The user store could not be read or written
    #[error("User store failure: {message} {location}")]
    StoreFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication required {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Role '{required}' required, caller has '{actual}' {location}")]
    Forbidden {
        required: Role,
        actual: Role,
        location: ErrorLocation,
    },

    /// Identity provider rejected a request or returned something unusable
    #[error("Identity provider error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("OAuth state missing or mismatched {location}")]
    InvalidState { location: ErrorLocation },

    #[error("Auth configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StoreFailure { .. } => "STORE_FAILURE",
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        Self::StoreFailure {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
