use decomp_config::constants::{DECOMP_SETTINGS_DB, HOME};
use std::env;
use std::path::PathBuf;

/// File name of the settings database inside the data directory
pub const SETTINGS_DB_FILE: &str = "settings.db";

/// Get the path to the decomp data directory (~/.decomp)
pub fn decomp_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var(HOME) {
        PathBuf::from(home).join(".decomp")
    } else {
        // Fall back to dirs crate, then the working directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".decomp")
    }
}

/// Get the path to the settings database, honouring `DECOMP_SETTINGS_DB`
pub fn settings_db_path() -> PathBuf {
    match decomp_config::env_string(DECOMP_SETTINGS_DB) {
        Some(path) => PathBuf::from(path),
        None => decomp_dir().join(SETTINGS_DB_FILE),
    }
}
