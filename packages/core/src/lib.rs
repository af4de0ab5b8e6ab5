// ABOUTME: Core paths and helpers for decomp tooling
// ABOUTME: Foundational package providing shared functionality across all decomp packages

pub mod constants;

// Re-export constants
pub use constants::{decomp_dir, settings_db_path, SETTINGS_DB_FILE};
