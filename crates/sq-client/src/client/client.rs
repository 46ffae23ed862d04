use crate::{
    AUTH_EVENT_CAPACITY, AUTH_PATH, AuthApi, AuthEvent, ClientError, ClientResult, ProfileStore,
    REST_PATH, Session, SignUpMetadata,
};

use sq_config::ServiceConfig;
use sq_core::{Identity, NewProfile, Profile, ProfileUpdate};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

/// HTTP client for the hosted identity/data service (GoTrue + PostgREST)
pub struct ServiceClient {
    pub base_url: String,
    pub profile_table: String,
    pub email_check_rpc: String,
    anon_key: String,
    client: ReqwestClient,
    session: RwLock<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
}

impl ServiceClient {
    /// Create a new client with the default table and procedure names
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abcd.supabase.co")
    /// * `anon_key` - Public API key sent as `apikey` on every request
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let defaults = ServiceConfig::default();
        let (events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            profile_table: defaults.profile_table,
            email_check_rpc: defaults.email_check_rpc,
            anon_key: anon_key.to_string(),
            client: ReqwestClient::new(),
            session: RwLock::new(None),
            events,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        let mut client = Self::new(&config.url, &config.anon_key);
        client.profile_table = config.profile_table.clone();
        client.email_check_rpc = config.email_check_rpc.clone();
        client
    }

    /// Build an absolute URL for `path`, appending `query` pairs
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    fn table_path(&self) -> String {
        format!("{REST_PATH}/{}", self.profile_table)
    }

    /// Build a request carrying the API key and the bearer token
    /// (session access token, else the anon key)
    async fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let token = self
            .session
            .read()
            .await
            .as_ref()
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| self.anon_key.clone());

        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(api_error_from_body(status.as_u16(), &body));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> ClientResult<Vec<T>> {
        let url = self.endpoint(&self.table_path(), query)?;
        let req = self.request(Method::GET, url).await;
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session.clone());
        let _ = self.events.send(AuthEvent::SignedIn(session));
    }

    async fn clear_session(&self) {
        *self.session.write().await = None;
        let _ = self.events.send(AuthEvent::SignedOut);
    }
}

/// Map a GoTrue (`msg`/`error_code`, `error_description`) or PostgREST
/// (`message`/`code`/`details`/`hint`) error body onto `ClientError::Api`
#[track_caller]
pub(crate) fn api_error_from_body(status: u16, body: &Value) -> ClientError {
    let text = |key: &str| body.get(key).and_then(Value::as_str).map(String::from);

    let code = text("error_code").or_else(|| text("code"));
    let message = text("msg")
        .or_else(|| text("message"))
        .or_else(|| text("error_description"))
        .or_else(|| text("error"))
        .or_else(|| body.as_str().filter(|s| !s.trim().is_empty()).map(String::from))
        .unwrap_or_else(|| String::from("Unknown error"));

    ClientError::Api {
        status,
        code,
        message,
        details: text("details"),
        hint: text("hint"),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// The signup endpoint answers with a session (auto-confirm), a bare user
/// (confirmation pending) or `{user, session}`
pub(crate) fn parse_sign_up(body: Value) -> ClientResult<(Option<Identity>, Option<Session>)> {
    if body.get("access_token").is_some() {
        let session: Session = serde_json::from_value(body)?;
        return Ok((Some(session.user.clone()), Some(session)));
    }

    if let Some(user) = body.get("user")
        && !user.is_null()
    {
        let identity: Identity = serde_json::from_value(user.clone())?;
        let session = match body.get("session") {
            Some(session) if !session.is_null() => Some(serde_json::from_value(session.clone())?),
            _ => None,
        };
        return Ok((Some(identity), session));
    }

    if body.get("id").is_some() {
        return Ok((Some(serde_json::from_value(body)?), None));
    }

    Ok((None, None))
}

#[async_trait]
impl AuthApi for ServiceClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<&SignUpMetadata>,
    ) -> ClientResult<Option<Identity>> {
        #[derive(Serialize)]
        struct SignUpRequest<'a> {
            email: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            data: Option<&'a SignUpMetadata>,
        }

        let body = SignUpRequest {
            email,
            password,
            data: metadata,
        };
        let url = self.endpoint(&format!("{AUTH_PATH}/signup"), &[])?;
        let req = self.request(Method::POST, url).await.json(&body);
        let (identity, session) = parse_sign_up(self.execute(req).await?)?;

        if let Some(session) = session {
            info!("Sign-up returned a session for {}", session.user.id);
            self.set_session(session).await;
        }

        Ok(identity)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ClientResult<Session> {
        #[derive(Serialize)]
        struct TokenRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let url = self.endpoint(&format!("{AUTH_PATH}/token"), &[("grant_type", "password")])?;
        let req = self
            .request(Method::POST, url)
            .await
            .json(&TokenRequest { email, password });
        let session: Session = serde_json::from_value(self.execute(req).await?)?;

        info!("Signed in as {}", session.user.id);
        self.set_session(session.clone()).await;

        Ok(session)
    }

    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ClientResult<String> {
        let url = self.endpoint(
            &format!("{AUTH_PATH}/authorize"),
            &[
                ("provider", provider),
                ("redirect_to", redirect_to),
                ("prompt", "select_account"),
            ],
        )?;
        Ok(url.to_string())
    }

    async fn sign_out(&self) -> ClientResult<()> {
        let signed_in = self.session.read().await.is_some();

        if signed_in {
            let url = self.endpoint(&format!("{AUTH_PATH}/logout"), &[])?;
            let req = self.request(Method::POST, url).await;
            match self.execute(req).await {
                Ok(_) => {}
                // Token already revoked or expired server-side
                Err(e) if matches!(e.status(), Some(401 | 403 | 404)) => {
                    debug!("Logout on expired session: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        self.clear_session().await;
        info!("Signed out");
        Ok(())
    }

    async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct RecoverRequest<'a> {
            email: &'a str,
        }

        let url = self.endpoint(
            &format!("{AUTH_PATH}/recover"),
            &[("redirect_to", redirect_to)],
        )?;
        let req = self
            .request(Method::POST, url)
            .await
            .json(&RecoverRequest { email });
        self.execute(req).await?;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

#[async_trait]
impl ProfileStore for ServiceClient {
    async fn fetch_profile(&self, id: Uuid) -> ClientResult<Option<Profile>> {
        let filter = format!("eq.{id}");
        let mut rows: Vec<Profile> = self
            .fetch_rows(&[("id", filter.as_str()), ("select", "*")])
            .await?;

        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            n => Err(ClientError::unexpected(format!(
                "expected at most one profile row for {id}, got {n}"
            ))),
        }
    }

    async fn insert_profile(&self, profile: &NewProfile) -> ClientResult<()> {
        let url = self.endpoint(&self.table_path(), &[])?;
        let req = self
            .request(Method::POST, url)
            .await
            .header("Prefer", "return=minimal")
            .json(profile);
        self.execute(req).await?;

        debug!("Inserted {} profile for {}", profile.account_type, profile.id);
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> ClientResult<()> {
        let filter = format!("eq.{id}");
        let url = self.endpoint(&self.table_path(), &[("id", filter.as_str())])?;
        let req = self
            .request(Method::PATCH, url)
            .await
            .header("Prefer", "return=minimal")
            .json(update);
        self.execute(req).await?;
        Ok(())
    }

    async fn replace_profile(&self, profile: &NewProfile) -> ClientResult<()> {
        let filter = format!("eq.{}", profile.id);
        let url = self.endpoint(&self.table_path(), &[("id", filter.as_str())])?;
        let req = self
            .request(Method::PATCH, url)
            .await
            .header("Prefer", "return=minimal")
            .json(profile);
        self.execute(req).await?;
        Ok(())
    }

    async fn find_parent_by_email(&self, email: &str) -> ClientResult<Option<Uuid>> {
        #[derive(Deserialize)]
        struct ParentRow {
            id: Uuid,
        }

        let filter = format!("eq.{email}");
        let rows: Vec<ParentRow> = self
            .fetch_rows(&[
                ("email", filter.as_str()),
                ("account_type", "eq.parent"),
                ("select", "id,account_type"),
            ])
            .await?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(row.id)),
            rows => Err(ClientError::unexpected(format!(
                "expected at most one parent profile for {email}, got {}",
                rows.len()
            ))),
        }
    }

    async fn is_email_available(&self, email: &str) -> ClientResult<bool> {
        #[derive(Serialize)]
        struct EmailCheck<'a> {
            check_email: &'a str,
        }

        let url = self.endpoint(&format!("{REST_PATH}/rpc/{}", self.email_check_rpc), &[])?;
        let req = self
            .request(Method::POST, url)
            .await
            .json(&EmailCheck { check_email: email });
        let body = self.execute(req).await?;

        body.as_bool().ok_or_else(|| {
            ClientError::unexpected(format!("{} returned {body}", self.email_check_rpc))
        })
    }
}
