use crate::{AuthEvent, ClientResult, Session, SignUpMetadata};

use sq_core::Identity;

use async_trait::async_trait;
use tokio::sync::broadcast;

/// Identity half of the hosted service.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an identity. Returns `None` when the service accepted the
    /// request without handing back a user.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<&SignUpMetadata>,
    ) -> ClientResult<Option<Identity>>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ClientResult<Session>;

    /// Browser entry point of the federated sign-in. Builds the URL only.
    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ClientResult<String>;

    async fn sign_out(&self) -> ClientResult<()>;

    /// Current in-memory session, if any
    async fn session(&self) -> Option<Session>;

    /// Ask the service to mail a reset link that returns to `redirect_to`.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> ClientResult<()>;

    /// Auth state change stream
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
