
use crate::AuthFlows;

use sq_client::{AuthApi, AuthEvent, ClientError, ClientResult, ProfileStore, Session, SignUpMetadata};
use sq_config::SiteConfig;
use sq_core::{Identity, NewProfile, Profile, ProfileUpdate, StudentFields};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::{Notify, broadcast};
use uuid::Uuid;

pub(crate) const EMAIL: &str = "someone@school.org";
pub(crate) const PASSWORD: &str = "secret1";

/// Scripted service error, rebuilt on every call
#[derive(Debug, Clone, Copy)]
pub(crate) struct Failure {
    pub status: u16,
    pub code: Option<&'static str>,
    pub message: &'static str,
}

impl Failure {
    pub(crate) fn new(status: u16, code: Option<&'static str>, message: &'static str) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub(crate) fn message(message: &'static str) -> Self {
        Self::new(400, None, message)
    }

    pub(crate) fn to_error(self) -> ClientError {
        ClientError::api_error(self.status, self.code.map(String::from), self.message)
    }
}

fn scripted(failure: Option<Failure>) -> ClientResult<()> {
    match failure {
        Some(failure) => Err(failure.to_error()),
        None => Ok(()),
    }
}

// =========================================================================
// Fake identity service
// =========================================================================

pub(crate) struct FakeAuth {
    pub user_id: Uuid,
    pub sign_in_error: Option<Failure>,
    pub sign_up_error: Option<Failure>,
    pub sign_up_returns_user: bool,
    pub sign_out_error: Option<Failure>,
    pub reset_error: Option<Failure>,
    pub oauth_error: bool,
    /// When set, sign-in waits for a notification before answering
    pub gate: Option<Arc<Notify>>,
    session: Mutex<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
    calls: Mutex<Vec<String>>,
}

impl Default for FakeAuth {
    fn default() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            user_id: Uuid::new_v4(),
            sign_in_error: None,
            sign_up_error: None,
            sign_up_returns_user: true,
            sign_out_error: None,
            reset_error: None,
            oauth_error: false,
            gate: None,
            session: Mutex::new(None),
            events,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeAuth {
    pub(crate) fn session_for(&self, email: &str) -> Session {
        Session {
            access_token: String::from("user-jwt"),
            refresh_token: None,
            expires_in: Some(3600),
            user: Identity::new(self.user_id, email),
        }
    }

    /// Start with an active session
    pub(crate) fn signed_in(self) -> Self {
        let session = self.session_for(EMAIL);
        *self.session.lock().unwrap() = Some(session);
        self
    }

    pub(crate) fn identity(&self) -> Identity {
        Identity::new(self.user_id, EMAIL)
    }

    pub(crate) fn calls(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(name))
            .count()
    }

    pub(crate) fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        metadata: Option<&SignUpMetadata>,
    ) -> ClientResult<Option<Identity>> {
        self.record(format!("sign_up {email} {metadata:?}"));
        scripted(self.sign_up_error)?;
        if !self.sign_up_returns_user {
            return Ok(None);
        }

        let session = self.session_for(email);
        *self.session.lock().unwrap() = Some(session.clone());
        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
        Ok(Some(session.user))
    }

    async fn sign_in_with_password(&self, email: &str, _password: &str) -> ClientResult<Session> {
        self.record(format!("sign_in {email}"));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        scripted(self.sign_in_error)?;

        let session = self.session_for(email);
        *self.session.lock().unwrap() = Some(session.clone());
        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
        Ok(session)
    }

    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ClientResult<String> {
        self.record(format!("oauth {provider} {redirect_to}"));
        if self.oauth_error {
            return Err(ClientError::invalid_url("bad", "relative URL without a base"));
        }
        Ok(format!(
            "https://service.example/auth/v1/authorize?provider={provider}&redirect_to={redirect_to}"
        ))
    }

    async fn sign_out(&self) -> ClientResult<()> {
        self.record(String::from("sign_out"));
        scripted(self.sign_out_error)?;
        *self.session.lock().unwrap() = None;
        let _ = self.events.send(AuthEvent::SignedOut);
        Ok(())
    }

    async fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> ClientResult<()> {
        self.record(format!("reset {email} {redirect_to}"));
        scripted(self.reset_error)
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

// =========================================================================
// Fake profile table
// =========================================================================

#[derive(Default)]
pub(crate) struct FakeStore {
    pub fetch_error: Option<Failure>,
    pub insert_error: Option<Failure>,
    pub update_error: Option<Failure>,
    pub parent_lookup_error: Option<Failure>,
    pub email_check_error: Option<Failure>,
    pub taken_emails: Vec<&'static str>,
    pub parents: HashMap<String, Uuid>,
    rows: Mutex<HashMap<Uuid, Profile>>,
    calls: Mutex<Vec<String>>,
}

impl FakeStore {
    pub(crate) fn with_row(self, profile: Profile) -> Self {
        self.rows.lock().unwrap().insert(profile.id, profile);
        self
    }

    pub(crate) fn row(&self, id: Uuid) -> Option<Profile> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn calls(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == name)
            .count()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl ProfileStore for FakeStore {
    async fn fetch_profile(&self, id: Uuid) -> ClientResult<Option<Profile>> {
        self.record("fetch");
        scripted(self.fetch_error)?;
        Ok(self.row(id))
    }

    async fn insert_profile(&self, profile: &NewProfile) -> ClientResult<()> {
        self.record("insert");
        scripted(self.insert_error)?;

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&profile.id) {
            return Err(Failure::new(
                409,
                Some("23505"),
                "duplicate key value violates unique constraint \"user_profiles_pkey\"",
            )
            .to_error());
        }
        rows.insert(profile.id, row_from_insert(profile));
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> ClientResult<()> {
        self.record("update");
        scripted(self.update_error)?;

        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.first_name = update.first_name.clone();
            row.full_name = update.full_name.clone();
            if let Some(StudentFields { age, parent_email }) = &update.student {
                row.age = *age;
                row.parent_email = parent_email.clone();
            }
        }
        Ok(())
    }

    async fn replace_profile(&self, profile: &NewProfile) -> ClientResult<()> {
        self.record("replace");
        scripted(self.update_error)?;

        if let Some(row) = self.rows.lock().unwrap().get_mut(&profile.id) {
            *row = Profile {
                full_name: row.full_name.take(),
                username: row.username.take(),
                avatar_url: row.avatar_url.take(),
                ..row_from_insert(profile)
            };
        }
        Ok(())
    }

    async fn find_parent_by_email(&self, email: &str) -> ClientResult<Option<Uuid>> {
        self.record("find_parent");
        scripted(self.parent_lookup_error)?;
        Ok(self.parents.get(email).copied())
    }

    async fn is_email_available(&self, email: &str) -> ClientResult<bool> {
        self.record("email_check");
        scripted(self.email_check_error)?;
        Ok(!self.taken_emails.iter().any(|taken| *taken == email))
    }
}

fn row_from_insert(profile: &NewProfile) -> Profile {
    Profile {
        id: profile.id,
        email: Some(profile.email.clone()),
        account_type: Some(profile.account_type.to_string()),
        first_name: profile.first_name.clone(),
        full_name: None,
        username: None,
        age: profile.age,
        parent_email: profile.parent_email.clone(),
        parent_id: profile.parent_id,
        avatar_url: None,
    }
}

// =========================================================================
// Helpers
// =========================================================================

pub(crate) fn profile_row(id: Uuid, account_type: Option<&str>) -> Profile {
    Profile {
        id,
        email: Some(String::from(EMAIL)),
        account_type: account_type.map(String::from),
        first_name: None,
        full_name: None,
        username: None,
        age: None,
        parent_email: None,
        parent_id: None,
        avatar_url: None,
    }
}

pub(crate) struct Harness {
    pub auth: Arc<FakeAuth>,
    pub store: Arc<FakeStore>,
    pub flows: AuthFlows<FakeAuth, FakeStore>,
    pub state_dir: TempDir,
}

pub(crate) fn harness(auth: FakeAuth, store: FakeStore) -> Harness {
    let auth = Arc::new(auth);
    let store = Arc::new(store);
    let state_dir = TempDir::new().unwrap();
    let flows = AuthFlows::new(
        Arc::clone(&auth),
        Arc::clone(&store),
        SiteConfig::default(),
        state_dir.path(),
    );

    Harness {
        auth,
        store,
        flows,
        state_dir,
    }
}
