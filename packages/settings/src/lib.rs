// ABOUTME: Persisted settings module
// ABOUTME: Typed accessors over SQLite-backed key/value slots

pub mod storage;
pub mod store;
pub mod theme;
pub mod types;
pub mod validation;


use decomp_storage::StorageError;
use thiserror::Error;

pub use storage::SettingsStorage;
pub use store::{
    Setting, SettingHandle, SettingsStore, AUTO_RECOMPILE, AUTO_RECOMPILE_DELAY,
    CODE_COLOR_SCHEME, CODE_FONT_SIZE, CODE_LINE_HEIGHT, MONOSPACE_FONT, THEME,
};
pub use theme::{is_dark, ColorSchemeProbe, EnvColorScheme, FixedColorScheme};
pub use types::*;
pub use validation::{parse_setting_value, validate_setting_value, ValidationError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Stored value for {key} is not valid: {value}")]
    InvalidStoredValue { key: SettingKey, value: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
