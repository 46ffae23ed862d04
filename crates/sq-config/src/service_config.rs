use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EMAIL_CHECK_RPC, DEFAULT_OAUTH_PROVIDER,
    DEFAULT_PROFILE_TABLE, DEFAULT_SERVICE_URL,
};

use serde::Deserialize;

/// Hosted identity/data service connection settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub anon_key: String,
    /// Table holding one profile row per identity
    pub profile_table: String,
    /// Remote procedure answering "is this email still free?"
    pub email_check_rpc: String,
    /// Federated identity provider offered next to password sign-in
    pub oauth_provider: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SERVICE_URL),
            anon_key: String::new(),
            profile_table: String::from(DEFAULT_PROFILE_TABLE),
            email_check_rpc: String::from(DEFAULT_EMAIL_CHECK_RPC),
            oauth_provider: String::from(DEFAULT_OAUTH_PROVIDER),
        }
    }
}

// Hand-written so the anon key never reaches a log line.
impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("profile_table", &self.profile_table)
            .field("email_check_rpc", &self.email_check_rpc)
            .field("oauth_provider", &self.oauth_provider)
            .finish()
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.url) {
            return Err(ConfigError::service(format!(
                "service.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::service(
                "service.anon_key is required (set SQ_SERVICE_ANON_KEY or config.toml)",
            ));
        }

        for (name, value) in [
            ("service.profile_table", &self.profile_table),
            ("service.email_check_rpc", &self.email_check_rpc),
            ("service.oauth_provider", &self.oauth_provider),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::service(format!("{name} cannot be empty")));
            }
        }

        Ok(())
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}
