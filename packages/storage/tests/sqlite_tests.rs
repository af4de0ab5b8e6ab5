// ABOUTME: Integration tests for SQLite connection setup
// ABOUTME: Tests on-disk creation, migrations, and persistence across pools

use decomp_storage::{connect, connect_in_memory};
use sqlx::Row;
use tempfile::TempDir;

#[tokio::test]
async fn test_connect_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("settings.db");

    let pool = connect(&db_path).await.unwrap();
    pool.close().await;

    assert!(db_path.exists());
}

#[tokio::test]
async fn test_migrations_create_settings_table() {
    let pool = connect_in_memory().await.unwrap();

    let row = sqlx::query(
        "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'settings'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(row.get::<i64, _>("n"), 1);
}

#[tokio::test]
async fn test_rows_survive_reconnect() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("settings.db");

    let pool = connect(&db_path).await.unwrap();
    sqlx::query("INSERT INTO settings (key, value) VALUES ('theme', '\"dark\"')")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    // Reconnecting re-runs migrations, which must be idempotent
    let pool = connect(&db_path).await.unwrap();
    let row = sqlx::query("SELECT value FROM settings WHERE key = 'theme'")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(row.get::<String, _>("value"), "\"dark\"");
}
