//! Client-persisted state shared between flows.
//!
//! Holds the intended account type picked before reaching the auth page
//! and the short-lived flags read by the avatar-selection step after a
//! student signs up. File location: `<config_dir>/local_state.json`.
//!
//! Reads of a missing file yield the default state. Writes are
//! last-write-wins; there is no locking between processes.

use crate::{ConfigError, ConfigErrorResult, local_state::LOCAL_STATE_FILENAME};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalState {
    /// Intended account type (`student`/`parent`/`teacher`), not authoritative
    pub account_type: Option<String>,
    /// Set right after a student signs up, consumed by avatar selection
    pub new_student_signup: bool,
    pub student_email: Option<String>,
    /// RFC 3339 timestamp of the last write
    pub updated_at: Option<String>,
}

impl LocalState {
    /// Path of the state file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(LOCAL_STATE_FILENAME)
    }

    /// Read the state file.
    ///
    /// Returns the default state if the file does not exist.
    /// Returns `Err` if the file exists but cannot be read or parsed.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<LocalState> {
        let path = Self::path_in(config_dir);

        if !path.exists() {
            return Ok(LocalState::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ConfigError::local_state(format!("Invalid local state file {}: {e}", path.display()))
        })
    }

    /// Write the state file, creating the config directory if needed.
    pub fn write_in(&self, config_dir: &Path) -> ConfigErrorResult<PathBuf> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = Self::path_in(config_dir);
        let stamped = LocalState {
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
            ..self.clone()
        };

        let content = serde_json::to_string_pretty(&stamped).map_err(|e| {
            ConfigError::local_state(format!("Failed to serialize local state: {e}"))
        })?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read, modify and write back in one call.
    pub fn update_in<F>(config_dir: &Path, change: F) -> ConfigErrorResult<LocalState>
    where
        F: FnOnce(&mut LocalState),
    {
        let mut state = Self::read_in(config_dir)?;
        change(&mut state);
        state.write_in(config_dir)?;
        Ok(state)
    }

    /// Persist the intended account type picked on the landing page.
    pub fn remember_account_type_in(
        config_dir: &Path,
        account_type: &str,
    ) -> ConfigErrorResult<()> {
        Self::update_in(config_dir, |state| {
            state.account_type = Some(account_type.to_string());
        })
        .map(|_| ())
    }

    /// Drop the intended account type once sign-up has used it.
    pub fn clear_account_type_in(config_dir: &Path) -> ConfigErrorResult<()> {
        Self::update_in(config_dir, |state| state.account_type = None).map(|_| ())
    }

    /// Flags read by the avatar-selection step.
    pub fn record_student_signup_in(config_dir: &Path, email: &str) -> ConfigErrorResult<()> {
        Self::update_in(config_dir, |state| {
            state.new_student_signup = true;
            state.student_email = Some(email.to_string());
        })
        .map(|_| ())
    }

    /// Delete the state file (sign-out). Succeeds if it does not exist.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = Self::path_in(config_dir);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}
