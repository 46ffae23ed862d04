use crate::WizardPanel;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Incorrect answer to '{question}' {location}")]
    CaptchaMismatch {
        question: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid account type: {value} {location}")]
    InvalidAccountType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Wizard is on the {current} panel, expected {expected} {location}")]
    WizardPanel {
        expected: WizardPanel,
        current: WizardPanel,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error carrying the message shown to the user
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for an inline form banner (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::CaptchaMismatch { question, .. } => {
                format!("Incorrect answer. Please try again. {question}")
            }
            Self::InvalidAccountType { .. } => {
                String::from("Invalid account type detected. Please contact support.")
            }
            Self::WizardPanel { .. } => String::from("Please complete the previous step first."),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
