//! Profile row - one per identity, owned by the application.

use crate::AccountType;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the profile table as read back from the data service.
///
/// `account_type` is kept as the raw stored string: rows written by older
/// clients or by hand may hold values outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub parent_email: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Parsed category, `None` when empty or unrecognised
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
            .as_deref()
            .and_then(|raw| AccountType::from_str(raw).ok())
    }

    pub fn is_student(&self) -> bool {
        self.account_type() == Some(AccountType::Student)
    }

    /// First non-empty of first name, full name, username, email.
    pub fn display_name(&self) -> String {
        [
            &self.first_name,
            &self.full_name,
            &self.username,
            &self.email,
        ]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_default()
    }

    /// Category badge text (`Student`, `Parent`, `Teacher`)
    pub fn badge(&self) -> Option<&'static str> {
        self.account_type().map(|account_type| account_type.label())
    }

    /// Letter avatar used when no avatar image is set.
    pub fn avatar_initial(&self) -> Option<char> {
        if self.avatar_url.as_deref().is_some_and(|url| !url.is_empty()) {
            return None;
        }

        [&self.first_name, &self.username]
            .into_iter()
            .flatten()
            .find_map(|value| value.chars().next())
            .and_then(|c| c.to_uppercase().next())
    }
}
