mod config;
mod error;
mod local_state;
mod log_level;
mod logging_config;
mod service_config;
mod site_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use local_state::local_state_file::LocalState;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use service_config::ServiceConfig;
pub use site_config::SiteConfig;

const CONFIG_DIR_ENV: &str = "SQ_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".sq";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_PROFILE_TABLE: &str = "user_profiles";
const DEFAULT_EMAIL_CHECK_RPC: &str = "check_email_availability";
const DEFAULT_OAUTH_PROVIDER: &str = "google";

const DEFAULT_SITE_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;
const DEFAULT_RESET_DIALOG_CLOSE_MS: u64 = 3000;
const DEFAULT_MODE_SWITCH_DELAY_MS: u64 = 2000;
const MAX_DELAY_MS: u64 = 10_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
