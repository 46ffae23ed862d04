//! Two-panel student sign-up.
//!
//! Panel 1 collects age and parent email, panel 2 the account fields and
//! the CAPTCHA. Only panel 2 talks to the service.

use crate::messages::{STUDENT_EMAIL_TAKEN, STUDENT_SIGN_UP_SUCCESS, onboarding_failure};
use crate::{AuthError, AuthResult, Provisioned, SubmitGuard, insert_profile_once};

use sq_client::{AuthApi, ProfileStore, SignUpMetadata};
use sq_config::{LocalState, SiteConfig};
use sq_core::{
    AccountForm, CoreError, Destination, FlowOutcome, FollowUp, NewProfile, Result as CoreResult,
    StudentRegistration, StudentSignupWizard, WizardPanel,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info, warn};

pub struct StudentOnboarding<A: AuthApi, P: ProfileStore> {
    auth: Arc<A>,
    profiles: Arc<P>,
    site: SiteConfig,
    state_dir: PathBuf,
    wizard: StudentSignupWizard,
    guard: SubmitGuard,
}

impl<A: AuthApi, P: ProfileStore> StudentOnboarding<A, P> {
    pub fn new(auth: Arc<A>, profiles: Arc<P>, site: SiteConfig, state_dir: &Path) -> Self {
        Self {
            auth,
            profiles,
            site,
            state_dir: state_dir.to_path_buf(),
            wizard: StudentSignupWizard::new(),
            guard: SubmitGuard::new(),
        }
    }

    pub fn wizard(&self) -> &StudentSignupWizard {
        &self.wizard
    }

    pub fn panel(&self) -> WizardPanel {
        self.wizard.panel()
    }

    /// Validate panel 1 and move to panel 2. No network call.
    pub fn submit_details(&mut self, age: &str, parent_email: &str) -> CoreResult<()> {
        self.wizard.submit_details(age, parent_email)
    }

    pub fn back(&mut self) {
        self.wizard.back();
    }

    /// Validate panel 2, then create the identity and the student profile.
    ///
    /// A wrong CAPTCHA answer asks the form to clear that input.
    pub async fn submit_account(&self, form: &AccountForm) -> FlowOutcome {
        let registration = match self.wizard.submit_account(form) {
            Ok(registration) => registration,
            Err(e @ CoreError::CaptchaMismatch { .. }) => {
                return FlowOutcome::error(e.user_message()).with_follow_up(FollowUp::ClearCaptcha);
            }
            Err(e) => return FlowOutcome::error(e.user_message()),
        };

        let Some(_permit) = self.guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        match self.register(&registration).await {
            Ok(()) => FlowOutcome::redirect(
                STUDENT_SIGN_UP_SUCCESS,
                Destination::AvatarSelection,
                self.site.redirect_delay_ms,
            ),
            Err(AuthError::EmailUnavailable { .. }) => FlowOutcome::error(STUDENT_EMAIL_TAKEN),
            Err(AuthError::Client(e)) => {
                error!("Signup error (code: {}): {e}", e.code().unwrap_or("none"));
                FlowOutcome::error(onboarding_failure(&e.user_message()))
            }
            Err(e) => {
                error!("Signup error: {e}");
                FlowOutcome::error(onboarding_failure(""))
            }
        }
    }

    async fn register(&self, registration: &StudentRegistration) -> AuthResult<()> {
        let email = registration.email.as_str();

        // A failed check counts as "taken"
        let available = match self.profiles.is_email_available(email).await {
            Ok(available) => available,
            Err(e) => {
                warn!("Email availability check failed: {e}");
                false
            }
        };
        if !available {
            return Err(AuthError::email_unavailable());
        }

        let parent_id = match self
            .profiles
            .find_parent_by_email(&registration.parent_email)
            .await
        {
            Ok(parent_id) => parent_id,
            Err(e) => {
                if !e.is_no_single_row() {
                    error!("Error looking up parent: {e}");
                }
                None
            }
        };

        let metadata = SignUpMetadata::student(&registration.first_name);
        let identity = self
            .auth
            .sign_up(email, &registration.password, Some(&metadata))
            .await?
            .ok_or_else(AuthError::missing_identity)?;

        let profile = NewProfile::student(&identity, registration, parent_id);
        let provisioned = insert_profile_once(self.profiles.as_ref(), &profile).await?;
        if provisioned == Provisioned::AlreadyPresent {
            warn!(
                "Profile for {} already existed, writing the student fields over it",
                identity.id
            );
            self.profiles.replace_profile(&profile).await?;
        }
        info!(
            "Student account {} created (parent linked: {})",
            identity.id,
            parent_id.is_some()
        );

        if let Err(e) = LocalState::record_student_signup_in(&self.state_dir, email) {
            warn!("Could not record the new student sign-up: {e}");
        }

        Ok(())
    }
}
