use crate::messages::{
    GENERIC_FAILURE, GOOGLE_BLOCKED_FOR_STUDENTS, GOOGLE_FAILED, LOGIN_SUCCESS, LOGOUT_FAILED,
    RESET_EMAIL_REQUIRED, RESET_EMAIL_SENT, RESET_FAILED, SIGN_UP_SUCCESS, auth_failure,
    or_fallback,
};
use crate::{
    AuthError, AuthResult, ProfileEditor, ProfileProvisioner, StudentOnboarding, SubmitGuard,
    ensure_profile,
};

use sq_client::{AuthApi, ClientError, ProfileStore};
use sq_config::{LocalState, SiteConfig};
use sq_core::validation::validate_credentials;
use sq_core::{
    AccountType, AccountTypeHint, Destination, FlowOutcome, FollowUp, Identity, NavigationTarget,
    ProfileLookup, Resolution, resolve_destination,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info, warn};

const DEFAULT_OAUTH_PROVIDER: &str = "google";

/// Entry point for the auth page flows.
///
/// Sign-in, sign-up and federated sign-in share one [`SubmitGuard`]
/// (they are buttons of the same form); the reset dialog has its own.
pub struct AuthFlows<A: AuthApi, P: ProfileStore> {
    auth: Arc<A>,
    profiles: Arc<P>,
    site: SiteConfig,
    oauth_provider: String,
    state_dir: PathBuf,
    guard: SubmitGuard,
    reset_guard: SubmitGuard,
}

impl<A: AuthApi, P: ProfileStore> AuthFlows<A, P> {
    /// # Arguments
    /// * `state_dir` - Directory holding the client-persisted local state
    pub fn new(auth: Arc<A>, profiles: Arc<P>, site: SiteConfig, state_dir: &Path) -> Self {
        Self {
            auth,
            profiles,
            site,
            oauth_provider: String::from(DEFAULT_OAUTH_PROVIDER),
            state_dir: state_dir.to_path_buf(),
            guard: SubmitGuard::new(),
            reset_guard: SubmitGuard::new(),
        }
    }

    pub fn with_oauth_provider(mut self, provider: &str) -> Self {
        self.oauth_provider = provider.to_string();
        self
    }

    pub fn submit_guard(&self) -> &SubmitGuard {
        &self.guard
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Hint from the navigation query value, else the persisted preference.
    pub fn hint(&self, query: Option<&str>) -> AccountTypeHint {
        let persisted = match LocalState::read_in(&self.state_dir) {
            Ok(state) => state.account_type,
            Err(e) => {
                warn!("Could not read local state: {e}");
                None
            }
        };
        AccountTypeHint::from_sources(query, persisted.as_deref())
    }

    pub fn student_onboarding(&self) -> StudentOnboarding<A, P> {
        StudentOnboarding::new(
            Arc::clone(&self.auth),
            Arc::clone(&self.profiles),
            self.site.clone(),
            &self.state_dir,
        )
    }

    pub fn profile_editor(&self) -> ProfileEditor<A, P> {
        ProfileEditor::new(Arc::clone(&self.auth), Arc::clone(&self.profiles))
    }

    /// Listener creating missing profiles on sign-in events
    pub fn profile_provisioner(&self, hint: AccountTypeHint) -> ProfileProvisioner<P> {
        ProfileProvisioner::new(Arc::clone(&self.profiles), &self.state_dir, hint)
    }

    // =========================================================================
    // Sign-in
    // =========================================================================

    /// Password sign-in followed by account resolution.
    pub async fn sign_in(&self, email: &str, password: &str, hint: AccountTypeHint) -> FlowOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        let email = email.trim();
        if let Err(e) = validate_credentials(email, password) {
            return FlowOutcome::error(e.user_message());
        }

        info!("Login attempt for {email} (account type from context: {hint})");

        let session = match self.auth.sign_in_with_password(email, password).await {
            Ok(session) => session,
            Err(e) => return self.service_failure("Sign-in", &e),
        };
        let user_id = session.identity().id;

        let lookup = match self.profiles.fetch_profile(user_id).await {
            Ok(profile) => ProfileLookup::from(profile),
            Err(e) => {
                error!(
                    "Profile fetch failed for {user_id} (code: {}, account type from context: {hint}): {e}",
                    e.code().unwrap_or("none")
                );
                ProfileLookup::Failed(e.to_lookup_failure())
            }
        };

        match resolve_destination(&lookup, hint) {
            Resolution::Redirect {
                account_type,
                basis,
            } => {
                if basis.is_fallback() {
                    warn!("Redirecting {user_id} to {account_type} dashboard via {basis}");
                } else {
                    info!("Redirecting {user_id} to {account_type} dashboard");
                }
                FlowOutcome::redirect(
                    LOGIN_SUCCESS,
                    account_type.dashboard(),
                    self.site.redirect_delay_ms,
                )
            }
            Resolution::Reject(failure) => {
                error!("Account resolution failed for {user_id}: {failure:?}");
                FlowOutcome::error(failure.user_message())
            }
        }
    }

    // =========================================================================
    // Sign-up
    // =========================================================================

    /// Email/password sign-up with the category chosen by the hint
    /// (student when unset).
    pub async fn sign_up(&self, email: &str, password: &str, hint: AccountTypeHint) -> FlowOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        let email = email.trim();
        if let Err(e) = validate_credentials(email, password) {
            return FlowOutcome::error(e.user_message());
        }

        let account_type = hint.account_type().unwrap_or_default();
        info!("Sign-up attempt for {email} as {account_type}");

        match self.create_account(email, password, account_type).await {
            Ok(()) => {
                if let Err(e) = LocalState::clear_account_type_in(&self.state_dir) {
                    warn!("Could not clear the stored account type: {e}");
                }
                FlowOutcome::redirect(
                    SIGN_UP_SUCCESS,
                    account_type.dashboard(),
                    self.site.redirect_delay_ms,
                )
            }
            Err(AuthError::Client(e)) => self.service_failure("Sign-up", &e),
            Err(e) => {
                error!("Sign-up failed: {e}");
                FlowOutcome::error(GENERIC_FAILURE)
            }
        }
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        account_type: AccountType,
    ) -> AuthResult<()> {
        let identity = self
            .auth
            .sign_up(email, password, None)
            .await?
            .ok_or_else(AuthError::missing_identity)?;

        let identity = Identity::new(identity.id, email);
        ensure_profile(self.profiles.as_ref(), &identity, account_type).await?;
        Ok(())
    }

    // =========================================================================
    // Federated sign-in
    // =========================================================================

    /// Hand off to the federated provider; returns to the index page.
    ///
    /// Refused for a student hint without contacting the service.
    pub async fn sign_in_with_google(&self, hint: AccountTypeHint) -> FlowOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        if hint.is_student() {
            warn!("Federated sign-in refused for student account type");
            return FlowOutcome::error(GOOGLE_BLOCKED_FOR_STUDENTS);
        }

        let redirect_to = self.site.url_for(Destination::Index.path());
        match self
            .auth
            .oauth_authorize_url(&self.oauth_provider, &redirect_to)
        {
            Ok(url) => FlowOutcome::navigate(NavigationTarget::External(url), 0),
            Err(e) => {
                error!("Federated sign-in failed: {e}");
                FlowOutcome::error(GOOGLE_FAILED)
            }
        }
    }

    // =========================================================================
    // Password reset
    // =========================================================================

    /// Ask the service to mail a reset link returning to the sign-in page.
    pub async fn request_password_reset(&self, email: &str) -> FlowOutcome {
        let email = email.trim();
        if email.is_empty() {
            return FlowOutcome::error(RESET_EMAIL_REQUIRED);
        }

        let Some(_permit) = self.reset_guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        let redirect_to = self.site.url_for(Destination::SignIn.path());
        match self
            .auth
            .reset_password_for_email(email, &redirect_to)
            .await
        {
            Ok(()) => {
                info!("Password reset email requested for {email}");
                FlowOutcome::success(RESET_EMAIL_SENT).with_follow_up(FollowUp::CloseResetDialog {
                    after_ms: self.site.reset_dialog_close_ms,
                })
            }
            Err(e) => {
                error!("Password reset error: {e}");
                FlowOutcome::error(or_fallback(&e.user_message(), RESET_FAILED))
            }
        }
    }

    // =========================================================================
    // Sign-out
    // =========================================================================

    /// End the session, forget client-persisted state, go to sign-in.
    pub async fn sign_out(&self) -> FlowOutcome {
        match self.auth.sign_out().await {
            Ok(()) => {
                if let Err(e) = LocalState::remove_in(&self.state_dir) {
                    warn!("Could not clear local state: {e}");
                }
                FlowOutcome::navigate(NavigationTarget::Page(Destination::SignIn), 0)
            }
            Err(e) => {
                error!("Logout error: {e}");
                FlowOutcome::error(LOGOUT_FAILED)
            }
        }
    }

    fn service_failure(&self, action: &str, e: &ClientError) -> FlowOutcome {
        error!(
            "{action} failed (code: {}): {e}",
            e.code().unwrap_or("none")
        );
        auth_failure(&e.user_message(), self.site.mode_switch_delay_ms)
    }
}
