use crate::validation::{coerce_age, is_valid_email, validate_profile_age};
use crate::{CoreError, Profile, ProfileUpdate, Result as CoreErrorResult, StudentFields};

use serde::Serialize;

/// Raw values from the profile edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub full_name: String,
    pub age: String,
    pub parent_email: String,
}

impl ProfileForm {
    /// Pre-fill the form from a loaded profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone().unwrap_or_default(),
            full_name: profile.full_name.clone().unwrap_or_default(),
            age: profile.age.map(|age| age.to_string()).unwrap_or_default(),
            parent_email: profile.parent_email.clone().unwrap_or_default(),
        }
    }

    /// Validate against the profile being edited and build the update.
    #[track_caller]
    pub fn to_update(&self, profile: &Profile) -> CoreErrorResult<ProfileUpdate> {
        let is_student = profile.is_student();
        let first_name = self.first_name.trim();
        let full_name = self.full_name.trim();

        if first_name.is_empty() && is_student {
            return Err(CoreError::validation("First name is required"));
        }

        let student = if is_student {
            let age = coerce_age(&self.age);
            if let Some(age) = age {
                validate_profile_age(age)?;
            }

            let parent_email = self.parent_email.trim();
            if !parent_email.is_empty() && !is_valid_email(parent_email) {
                return Err(CoreError::validation(
                    "Please enter a valid parent email address",
                ));
            }

            Some(StudentFields {
                age,
                parent_email: non_empty(parent_email),
            })
        } else {
            None
        };

        Ok(ProfileUpdate {
            first_name: non_empty(first_name),
            full_name: non_empty(full_name),
            student,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
