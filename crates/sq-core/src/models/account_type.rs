use crate::{CoreError, Destination, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account category stored on a profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Signups that don't name a category become students
    #[default]
    Student,
    Parent,
    Teacher,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [Self::Student, Self::Parent, Self::Teacher];

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
        }
    }

    /// Badge label shown on the profile page
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Parent => "Parent",
            Self::Teacher => "Teacher",
        }
    }

    /// Dashboard this category lands on after signing in
    pub fn dashboard(&self) -> Destination {
        match self {
            Self::Student => Destination::StudentDashboard,
            Self::Parent => Destination::ParentDashboard,
            Self::Teacher => Destination::TeacherDashboard,
        }
    }
}

impl FromStr for AccountType {
    type Err = CoreError;

    /// Storage values are untyped, so surrounding whitespace and case are ignored.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "parent" => Ok(Self::Parent),
            "teacher" => Ok(Self::Teacher),
            _ => Err(CoreError::InvalidAccountType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
