use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a hosted-service settings error
    #[track_caller]
    pub fn service<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Service",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a site settings error
    #[track_caller]
    pub fn site<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Site",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a local state error
    #[track_caller]
    pub fn local_state<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "LocalState",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a serde error
    #[track_caller]
    pub fn serde<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Serde",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl serde::de::Error for ConfigError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        ConfigError::serde(msg.to_string())
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
