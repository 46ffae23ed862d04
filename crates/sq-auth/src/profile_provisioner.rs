//! Profile row creation for freshly signed-in identities.
//!
//! A profile is created right after sign-up and again, defensively, on
//! every sign-in event that finds it missing. Inserting over an existing
//! row counts as success.

use sq_client::{AuthEvent, ClientResult, ProfileStore};
use sq_config::LocalState;
use sq_core::{AccountType, AccountTypeHint, Identity, NewProfile};

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// What `ensure_profile` found or did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyPresent,
}

/// Insert `profile`, treating a duplicate-key rejection as success.
pub async fn insert_profile_once<P>(store: &P, profile: &NewProfile) -> ClientResult<Provisioned>
where
    P: ProfileStore + ?Sized,
{
    match store.insert_profile(profile).await {
        Ok(()) => Ok(Provisioned::Created),
        Err(e) if e.is_duplicate() => {
            debug!("Profile for {} already exists (duplicate key)", profile.id);
            Ok(Provisioned::AlreadyPresent)
        }
        Err(e) => Err(e),
    }
}

/// Make sure `identity` has a profile row, creating one with
/// `account_type` when none is visible.
///
/// A failed existence check is not fatal: the insert decides.
pub async fn ensure_profile<P>(
    store: &P,
    identity: &Identity,
    account_type: AccountType,
) -> ClientResult<Provisioned>
where
    P: ProfileStore + ?Sized,
{
    match store.fetch_profile(identity.id).await {
        Ok(Some(_)) => {
            debug!("Profile for {} already exists", identity.id);
            return Ok(Provisioned::AlreadyPresent);
        }
        Ok(None) => {}
        Err(e) => warn!("Profile existence check for {} failed: {e}", identity.id),
    }

    insert_profile_once(store, &NewProfile::new(identity, account_type)).await
}

/// Listens to auth state changes and creates missing profile rows.
///
/// Failures are logged and swallowed; the flow that triggered the
/// sign-in reports its own outcome.
pub struct ProfileProvisioner<P: ProfileStore> {
    profiles: Arc<P>,
    state_dir: PathBuf,
    hint: AccountTypeHint,
}

impl<P: ProfileStore> ProfileProvisioner<P> {
    pub fn new(profiles: Arc<P>, state_dir: impl Into<PathBuf>, hint: AccountTypeHint) -> Self {
        Self {
            profiles,
            state_dir: state_dir.into(),
            hint,
        }
    }

    /// Category for a row created here: hint, else the persisted
    /// preference, else student.
    fn fallback_account_type(&self) -> AccountType {
        if let Some(account_type) = self.hint.account_type() {
            return account_type;
        }

        let persisted = match LocalState::read_in(&self.state_dir) {
            Ok(state) => state.account_type,
            Err(e) => {
                warn!("Could not read local state: {e}");
                None
            }
        };

        AccountTypeHint::from_sources(None, persisted.as_deref())
            .account_type()
            .unwrap_or_default()
    }

    /// Handle one event. Returns what happened for `SignedIn`, `None`
    /// for other events and for failures.
    pub async fn handle(&self, event: &AuthEvent) -> Option<Provisioned> {
        let AuthEvent::SignedIn(session) = event else {
            return None;
        };
        let identity = session.identity();
        info!("Auth state change: signed in as {}", identity.id);

        match self.profiles.fetch_profile(identity.id).await {
            Ok(Some(profile)) => {
                debug!(
                    "Profile found for {} (account type: {})",
                    identity.id,
                    profile.account_type.as_deref().unwrap_or("none")
                );
                return Some(Provisioned::AlreadyPresent);
            }
            Ok(None) => warn!("Profile not found for {}, creating it", identity.id),
            Err(e) => {
                error!(
                    "Profile fetch failed for {} (code: {}): {e}",
                    identity.id,
                    e.code().unwrap_or("none")
                );
                if e.is_access_policy_violation() {
                    error!("Access policy error on profile read; profile creation may fail too");
                }
            }
        }

        let account_type = self.fallback_account_type();
        info!("Creating {account_type} profile for {}", identity.id);

        match ensure_profile(self.profiles.as_ref(), identity, account_type).await {
            Ok(provisioned) => Some(provisioned),
            Err(e) => {
                error!(
                    "Profile creation failed for {} (code: {}): {e}",
                    identity.id,
                    e.code().unwrap_or("none")
                );
                if e.is_access_policy_violation() {
                    error!("Access policy rejected the profile insert; check the table policies");
                }
                None
            }
        }
    }

    /// Consume events until the channel closes or `shutdown` fires.
    /// Events already queued at shutdown are still handled.
    pub async fn run(
        self,
        mut events: broadcast::Receiver<AuthEvent>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Ok(event) => {
                        self.handle(&event).await;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Profile provisioner skipped {skipped} auth events");
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = shutdown.recv() => {
                    self.drain(&mut events).await;
                    break;
                }
            }
        }

        debug!("Profile provisioner stopped");
    }

    async fn drain(&self, events: &mut broadcast::Receiver<AuthEvent>) {
        loop {
            match events.try_recv() {
                Ok(event) => {
                    self.handle(&event).await;
                }
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    }
}
