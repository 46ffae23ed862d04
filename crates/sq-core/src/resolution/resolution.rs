use crate::{AccountType, Destination};

use serde::Serialize;

/// Outcome of the resolution policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Redirect {
        account_type: AccountType,
        basis: ResolutionBasis,
    },
    Reject(ResolutionFailure),
}

impl Resolution {
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Self::Redirect { account_type, .. } => Some(account_type.dashboard()),
            Self::Reject(_) => None,
        }
    }
}

/// Why a redirect was chosen; logged, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionBasis {
    /// Stored category parsed cleanly
    StoredProfile,
    HintAfterReadError,
    HintAfterMissingProfile,
    HintAfterMissingAccountType,
    /// Unrecognised stored category, hint says student
    LegacyStudentFallback,
}

impl ResolutionBasis {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::StoredProfile)
    }
}

impl std::fmt::Display for ResolutionBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::StoredProfile => "stored profile",
            Self::HintAfterReadError => "hint after profile read error",
            Self::HintAfterMissingProfile => "hint after missing profile",
            Self::HintAfterMissingAccountType => "hint after missing account type",
            Self::LegacyStudentFallback => "legacy student fallback",
        };
        write!(f, "{text}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// Permission/policy error on the profile read; needs a server-side fix
    AccessPolicy { support_code: String },
    ProfileUnavailable,
    ProfileNotFound,
    AccountTypeMissing,
    InvalidAccountType { value: String },
}

impl ResolutionFailure {
    pub fn user_message(&self) -> String {
        match self {
            Self::AccessPolicy { support_code } => format!(
                "Account access error. Please contact support with error code: {support_code}. \
                 This is a database configuration issue that needs to be fixed by an administrator."
            ),
            Self::ProfileUnavailable => String::from(
                "Unable to load your account profile. Please try again or contact support.",
            ),
            Self::ProfileNotFound => String::from(
                "User profile not found. Please contact support to set up your account.",
            ),
            Self::AccountTypeMissing => {
                String::from("Account type is missing from your profile. Please contact support.")
            }
            Self::InvalidAccountType { .. } => {
                String::from("Invalid account type detected. Please contact support.")
            }
        }
    }
}
