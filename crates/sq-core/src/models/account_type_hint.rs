//! Transient account-category hint.
//!
//! Sourced from the `type` query parameter of the auth page or, failing
//! that, from the value persisted by the landing page. It only ever fills
//! gaps left by a missing or unreadable profile; a stored category that
//! parses always wins.

use crate::AccountType;

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountTypeHint(Option<AccountType>);

impl AccountTypeHint {
    pub fn unset() -> Self {
        Self(None)
    }

    /// Query value wins when non-empty, otherwise the persisted value.
    /// Unknown values leave the hint unset.
    pub fn from_sources(query: Option<&str>, persisted: Option<&str>) -> Self {
        let raw = query
            .filter(|value| !value.is_empty())
            .or(persisted.filter(|value| !value.is_empty()));

        match raw {
            Some(value) => Self::parse(value),
            None => Self::unset(),
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self(AccountType::from_str(raw).ok())
    }

    pub fn account_type(&self) -> Option<AccountType> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_student(&self) -> bool {
        self.0 == Some(AccountType::Student)
    }
}

impl From<AccountType> for AccountTypeHint {
    fn from(account_type: AccountType) -> Self {
        Self(Some(account_type))
    }
}

impl From<Option<AccountType>> for AccountTypeHint {
    fn from(account_type: Option<AccountType>) -> Self {
        Self(account_type)
    }
}

impl std::fmt::Display for AccountTypeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(account_type) => write!(f, "{account_type}"),
            None => write!(f, "not specified"),
        }
    }
}
