use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    LoggingConfig, ServiceConfig, SiteConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SQ_CONFIG_DIR env var, else use ./.sq/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SQ_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from an explicit config directory (CLI `--config-dir`, tests).
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SQ_CONFIG_DIR env var > ./.sq/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.service.validate()?;
        self.site.validate()?;

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::config(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the anon key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  service: {} (anon key {})",
            self.service.url,
            if self.service.anon_key.is_empty() {
                "missing"
            } else {
                "set"
            }
        );
        info!(
            "  data: table={}, email_check_rpc={}, oauth={}",
            self.service.profile_table, self.service.email_check_rpc, self.service.oauth_provider
        );
        info!(
            "  site: {} (redirect {}ms, reset dialog {}ms, mode switch {}ms)",
            self.site.origin,
            self.site.redirect_delay_ms,
            self.site.reset_dialog_close_ms,
            self.site.mode_switch_delay_ms
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Service
        Self::apply_env_string("SQ_SERVICE_URL", &mut self.service.url);
        Self::apply_env_string("SQ_SERVICE_ANON_KEY", &mut self.service.anon_key);
        Self::apply_env_string("SQ_SERVICE_PROFILE_TABLE", &mut self.service.profile_table);
        Self::apply_env_string(
            "SQ_SERVICE_EMAIL_CHECK_RPC",
            &mut self.service.email_check_rpc,
        );
        Self::apply_env_string("SQ_SERVICE_OAUTH_PROVIDER", &mut self.service.oauth_provider);

        // Site
        Self::apply_env_string("SQ_SITE_ORIGIN", &mut self.site.origin);
        Self::apply_env_parse("SQ_SITE_REDIRECT_DELAY_MS", &mut self.site.redirect_delay_ms);
        Self::apply_env_parse(
            "SQ_SITE_RESET_DIALOG_CLOSE_MS",
            &mut self.site.reset_dialog_close_ms,
        );
        Self::apply_env_parse(
            "SQ_SITE_MODE_SWITCH_DELAY_MS",
            &mut self.site.mode_switch_delay_ms,
        );

        // Logging
        Self::apply_env_parse("SQ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SQ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SQ_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
