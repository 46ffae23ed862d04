pub(crate) mod local_state_file;

/// File holding client-persisted values inside the config directory
pub(crate) const LOCAL_STATE_FILENAME: &str = "local_state.json";
