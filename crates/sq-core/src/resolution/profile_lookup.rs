use crate::Profile;

/// Result of reading the signed-in identity's profile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    /// Row exists; the category is the raw stored value
    Found { account_type: Option<String> },
    /// Read succeeded with zero rows
    Missing,
    /// Storage or permission error
    Failed(LookupFailure),
}

impl From<Option<Profile>> for ProfileLookup {
    fn from(profile: Option<Profile>) -> Self {
        match profile {
            Some(profile) => Self::Found {
                account_type: profile.account_type,
            },
            None => Self::Missing,
        }
    }
}

/// Error reported by the data service when reading a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub code: Option<String>,
    pub message: String,
}

/// Postgres `insufficient_privilege`
pub const ACCESS_POLICY_ERROR_CODE: &str = "42501";

const ACCESS_POLICY_MARKERS: [&str; 3] = ["permission denied", "policy", "row-level security"];

impl LookupFailure {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The caller lacks read permission on a row it should own.
    ///
    /// Never eligible for hint fallback: routing on a guess here could put
    /// the user in front of another account's dashboard.
    pub fn is_access_policy_violation(&self) -> bool {
        is_access_policy_violation(self.code.as_deref(), &self.message)
    }
}

/// Shared classifier for service error code/message pairs.
pub fn is_access_policy_violation(code: Option<&str>, message: &str) -> bool {
    if code == Some(ACCESS_POLICY_ERROR_CODE) {
        return true;
    }

    let message = message.to_lowercase();
    ACCESS_POLICY_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}
