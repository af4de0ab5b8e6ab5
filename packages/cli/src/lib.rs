// ABOUTME: Shared setup for the decomp command-line tool
// ABOUTME: Logging initialisation and settings database access

pub mod logging;

#[cfg(test)]
mod tests;

use decomp_settings::SettingsStore;
use decomp_storage::StorageResult;
use std::path::PathBuf;
use tracing::debug;

/// Open the settings store at `db`, or at the default location
pub async fn open_settings(db: Option<PathBuf>) -> StorageResult<SettingsStore> {
    let path = db.unwrap_or_else(decomp_core::settings_db_path);
    debug!(path = %path.display(), "Opening settings database");

    let pool = decomp_storage::connect(&path).await?;
    Ok(SettingsStore::new(pool))
}
