use sq_client::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures inside a flow before they are turned into a banner
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email address is already registered {location}")]
    EmailUnavailable { location: ErrorLocation },

    #[error("Sign-up returned no user {location}")]
    MissingIdentity { location: ErrorLocation },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl AuthError {
    #[track_caller]
    pub fn email_unavailable() -> Self {
        AuthError::EmailUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_identity() -> Self {
        AuthError::MissingIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
