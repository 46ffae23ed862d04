use crate::{DUPLICATE_ERROR_CODE, NO_SINGLE_ROW_ERROR_CODE};

use sq_core::LookupFailure;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the hosted service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} (code: {}) {location}", .code.as_deref().unwrap_or("none"))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        hint: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No active session {location}")]
    NoSession { location: ErrorLocation },

    #[error("Unexpected response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error<S: Into<String>>(status: u16, code: Option<String>, message: S) -> Self {
        ClientError::Api {
            status,
            code,
            message: message.into(),
            details: None,
            hint: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(url: &str, message: S) -> Self {
        ClientError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_session() -> Self {
        ClientError::NoSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        ClientError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Service error code (`23505`, `42501`, `PGRST116`, `user_already_exists`, ...)
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Insert hit an existing row
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Api { code, message, .. } => {
                code.as_deref() == Some(DUPLICATE_ERROR_CODE) || message.contains("duplicate key")
            }
            _ => false,
        }
    }

    /// Caller lacks row-level permission (misconfigured policy)
    pub fn is_access_policy_violation(&self) -> bool {
        match self {
            Self::Api { code, message, .. } => {
                sq_core::is_access_policy_violation(code.as_deref(), message)
            }
            _ => false,
        }
    }

    /// A single-row read matched zero or several rows
    pub fn is_no_single_row(&self) -> bool {
        self.code() == Some(NO_SINGLE_ROW_ERROR_CODE)
    }

    /// Message without source location, as shown in a form banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http { .. } => {
                String::from("Unable to reach the server. Please check your connection and try again.")
            }
            Self::NoSession { .. } => String::from("No active session"),
            Self::Json { message, .. }
            | Self::InvalidUrl { message, .. }
            | Self::UnexpectedResponse { message, .. } => message.clone(),
        }
    }

    /// Profile read failure in the shape the resolution policy consumes
    pub fn to_lookup_failure(&self) -> LookupFailure {
        LookupFailure::new(self.code().map(String::from), self.user_message())
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
