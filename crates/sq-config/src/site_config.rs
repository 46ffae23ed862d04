use crate::service_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MODE_SWITCH_DELAY_MS, DEFAULT_REDIRECT_DELAY_MS,
    DEFAULT_RESET_DIALOG_CLOSE_MS, DEFAULT_SITE_ORIGIN, MAX_DELAY_MS,
};

use serde::Deserialize;

/// Where the site lives and how long banners stay up before moving on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin used for return URLs handed to the identity service
    pub origin: String,
    /// Delay between the success banner and navigation
    pub redirect_delay_ms: u64,
    /// Delay before the password-reset dialog closes itself
    pub reset_dialog_close_ms: u64,
    /// Delay before a sign-up form flips to sign-in after "already registered"
    pub mode_switch_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: String::from(DEFAULT_SITE_ORIGIN),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            reset_dialog_close_ms: DEFAULT_RESET_DIALOG_CLOSE_MS,
            mode_switch_delay_ms: DEFAULT_MODE_SWITCH_DELAY_MS,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.origin) {
            return Err(ConfigError::site(format!(
                "site.origin must start with http:// or https://, got '{}'",
                self.origin
            )));
        }

        for (name, value) in [
            ("site.redirect_delay_ms", self.redirect_delay_ms),
            ("site.reset_dialog_close_ms", self.reset_dialog_close_ms),
            ("site.mode_switch_delay_ms", self.mode_switch_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::site(format!(
                    "{name} must be 0-{MAX_DELAY_MS}, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// `<origin>/<path>` with exactly one slash between them
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
