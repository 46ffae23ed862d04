//! Two-panel student onboarding state machine.
//!
//! ```text
//! Details --submit_details--> Account
//! Account --back------------> Details   (draft kept)
//! Account --submit_account--> StudentRegistration (panel unchanged)
//! ```
//!
//! State lives only as long as the wizard value; nothing is persisted.

use crate::validation::{coerce_age, validate_email, validate_password};
use crate::{
    AccountForm, Captcha, CoreError, Result as CoreErrorResult, StudentDraft,
    StudentRegistration, WizardPanel,
};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Default)]
pub struct StudentSignupWizard {
    panel: WizardPanel,
    draft: StudentDraft,
    captcha: Captcha,
}

impl StudentSignupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> WizardPanel {
        self.panel
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn captcha(&self) -> &Captcha {
        &self.captcha
    }

    /// Validate panel 1 and advance to panel 2.
    ///
    /// On failure the wizard stays on panel 1 and the previous draft is kept.
    #[track_caller]
    pub fn submit_details(&mut self, age: &str, parent_email: &str) -> CoreErrorResult<()> {
        self.expect_panel(WizardPanel::Details)?;

        if age.trim().is_empty() {
            return Err(CoreError::validation("Please select your age"));
        }
        let age = coerce_age(age).ok_or_else(|| CoreError::validation("Please select your age"))?;

        let parent_email = parent_email.trim();
        if parent_email.is_empty() {
            return Err(CoreError::validation("Please enter your parent's email"));
        }
        validate_email(parent_email)?;

        self.draft = StudentDraft {
            age: Some(age),
            parent_email: Some(parent_email.to_string()),
        };
        self.panel = WizardPanel::Account;
        Ok(())
    }

    /// Return to panel 1. No-op when already there.
    pub fn back(&mut self) {
        self.panel = WizardPanel::Details;
    }

    /// Validate panel 2 and combine it with the draft.
    ///
    /// The wizard does not move: a wrong CAPTCHA answer keeps the user on
    /// panel 2 and the caller clears the input.
    #[track_caller]
    pub fn submit_account(&self, form: &AccountForm) -> CoreErrorResult<StudentRegistration> {
        self.expect_panel(WizardPanel::Account)?;

        let first_name = form.first_name.trim();
        if first_name.is_empty() {
            return Err(CoreError::validation("Please enter your first name"));
        }

        let email = form.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("Please enter your email address"));
        }
        validate_email(email)?;
        validate_password(&form.password)?;
        self.captcha.check(&form.captcha)?;

        let (Some(age), Some(parent_email)) = (self.draft.age, self.draft.parent_email.clone())
        else {
            return Err(CoreError::WizardPanel {
                expected: WizardPanel::Details,
                current: self.panel,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok(StudentRegistration {
            first_name: first_name.to_string(),
            email: email.to_string(),
            password: form.password.clone(),
            age,
            parent_email,
        })
    }

    #[track_caller]
    fn expect_panel(&self, expected: WizardPanel) -> CoreErrorResult<()> {
        if self.panel != expected {
            return Err(CoreError::WizardPanel {
                expected,
                current: self.panel,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
