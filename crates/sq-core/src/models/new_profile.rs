use crate::{AccountType, Identity, StudentRegistration};

use serde::Serialize;
use uuid::Uuid;

/// Insert payload for the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    pub email: String,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

impl NewProfile {
    /// Minimal row created alongside a plain email/password identity
    pub fn new(identity: &Identity, account_type: AccountType) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            account_type,
            first_name: None,
            age: None,
            parent_email: None,
            parent_id: None,
        }
    }

    /// Row created by the student onboarding wizard
    pub fn student(
        identity: &Identity,
        registration: &StudentRegistration,
        parent_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: identity.id,
            email: registration.email.clone(),
            account_type: AccountType::Student,
            first_name: Some(registration.first_name.clone()),
            age: Some(registration.age),
            parent_email: Some(registration.parent_email.clone()),
            parent_id,
        }
    }
}
