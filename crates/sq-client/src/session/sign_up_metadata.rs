use sq_core::AccountType;

use serde::Serialize;

/// User metadata stored on the identity at sign-up (`data` in the request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpMetadata {
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl SignUpMetadata {
    pub fn student(first_name: &str) -> Self {
        Self {
            account_type: AccountType::Student,
            first_name: Some(first_name.to_string()),
        }
    }
}
