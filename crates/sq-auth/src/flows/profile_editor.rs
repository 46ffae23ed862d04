use crate::SubmitGuard;
use crate::messages::{PROFILE_LOAD_FAILED, PROFILE_UPDATE_FAILED, PROFILE_UPDATED};

use sq_client::{AuthApi, ClientError, ClientResult, ProfileStore};
use sq_core::{Destination, FlowOutcome, NavigationTarget, Profile, ProfileForm, ProfileUpdate};

use std::sync::Arc;

use log::{error, info};
use serde::Serialize;
use uuid::Uuid;

/// What the profile page shows once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub title: String,
    pub display_name: String,
    pub badge: Option<&'static str>,
    pub avatar_url: Option<String>,
    pub avatar_initial: Option<char>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub form: ProfileForm,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        let display_name = profile.display_name();
        Self {
            title: format!("{display_name}'s Profile"),
            display_name,
            badge: profile.badge(),
            avatar_url: profile.avatar_url.clone().filter(|url| !url.is_empty()),
            avatar_initial: profile.avatar_initial(),
            email: profile.email.clone(),
            username: profile.username.clone(),
            form: ProfileForm::from_profile(profile),
        }
    }
}

/// Result of opening the profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileScreen {
    View(ProfileView),
    /// Redirect away or error banner instead of a page
    Leave(FlowOutcome),
}

/// Student profile page: load, edit, save.
pub struct ProfileEditor<A: AuthApi, P: ProfileStore> {
    auth: Arc<A>,
    profiles: Arc<P>,
    current: Option<Profile>,
    guard: SubmitGuard,
}

impl<A: AuthApi, P: ProfileStore> ProfileEditor<A, P> {
    pub fn new(auth: Arc<A>, profiles: Arc<P>) -> Self {
        Self {
            auth,
            profiles,
            current: None,
            guard: SubmitGuard::new(),
        }
    }

    /// Currently loaded profile snapshot
    pub fn profile(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    pub fn view(&self) -> Option<ProfileView> {
        self.current.as_ref().map(ProfileView::from)
    }

    /// Load the page. Without a session go to sign-in; the page is for
    /// students only, everyone else goes to the index page.
    pub async fn open(&mut self) -> ProfileScreen {
        let Some(session) = self.auth.session().await else {
            return ProfileScreen::Leave(FlowOutcome::navigate(
                NavigationTarget::Page(Destination::SignIn),
                0,
            ));
        };
        let user_id = session.identity().id;

        match self.profiles.fetch_profile(user_id).await {
            Ok(Some(profile)) if !profile.is_student() => ProfileScreen::Leave(
                FlowOutcome::navigate(NavigationTarget::Page(Destination::Index), 0),
            ),
            Ok(Some(profile)) => {
                let view = ProfileView::from(&profile);
                self.current = Some(profile);
                ProfileScreen::View(view)
            }
            Ok(None) => {
                error!("No profile row for {user_id}");
                ProfileScreen::Leave(FlowOutcome::error(PROFILE_LOAD_FAILED))
            }
            Err(e) => {
                error!("Error loading profile for {user_id}: {e}");
                ProfileScreen::Leave(FlowOutcome::error(PROFILE_LOAD_FAILED))
            }
        }
    }

    /// Validate and write the edited fields, then reload the snapshot.
    ///
    /// The write overwrites unconditionally; there is no version check.
    pub async fn save(&mut self, form: &ProfileForm) -> FlowOutcome {
        let Some(profile) = self.current.as_ref() else {
            return FlowOutcome::error(PROFILE_LOAD_FAILED);
        };

        let update = match form.to_update(profile) {
            Ok(update) => update,
            Err(e) => return FlowOutcome::error(e.user_message()),
        };

        let Some(_permit) = self.guard.try_acquire() else {
            return FlowOutcome::busy();
        };

        let user_id = match self.write(&update).await {
            Ok(user_id) => user_id,
            Err(e) => {
                error!("Error updating profile: {e}");
                return FlowOutcome::error(PROFILE_UPDATE_FAILED);
            }
        };
        info!("Profile {user_id} updated");

        match self.profiles.fetch_profile(user_id).await {
            Ok(Some(profile)) => {
                self.current = Some(profile);
                FlowOutcome::success(PROFILE_UPDATED)
            }
            Ok(None) => FlowOutcome::error(PROFILE_LOAD_FAILED),
            Err(e) => {
                error!("Error reloading profile: {e}");
                FlowOutcome::error(PROFILE_LOAD_FAILED)
            }
        }
    }

    async fn write(&self, update: &ProfileUpdate) -> ClientResult<Uuid> {
        let session = self.auth.session().await.ok_or_else(ClientError::no_session)?;
        let user_id = session.identity().id;
        self.profiles.update_profile(user_id, update).await?;
        Ok(user_id)
    }
}
