// ABOUTME: Tests for settings database access from the CLI
// ABOUTME: Explicit paths, the DECOMP_SETTINGS_DB override, and persistence

use crate::open_settings;
use decomp_config::constants::DECOMP_SETTINGS_DB;
use decomp_settings::Theme;
use serial_test::serial;
use std::env;
use tempfile::TempDir;

#[tokio::test]
async fn test_open_settings_at_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cli").join("settings.db");

    let store = open_settings(Some(db_path.clone())).await.unwrap();
    store.theme().set(Theme::Light).await.unwrap();

    assert!(db_path.exists());

    let reopened = open_settings(Some(db_path)).await.unwrap();
    assert_eq!(reopened.theme().get().await.unwrap(), Theme::Light);
}

#[tokio::test]
#[serial]
async fn test_open_settings_honours_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("from-env.db");
    env::set_var(DECOMP_SETTINGS_DB, &db_path);

    let result = open_settings(None).await;
    env::remove_var(DECOMP_SETTINGS_DB);

    let store = result.unwrap();
    assert_eq!(store.code_font_size().get().await.unwrap(), 11);
    assert!(db_path.exists());
}
