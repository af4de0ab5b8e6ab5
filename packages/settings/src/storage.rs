// ABOUTME: Storage operations for persisted settings
// ABOUTME: Raw JSON slot reads and writes against the settings table

use decomp_storage::StorageError;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::types::SettingKey;

pub struct SettingsStorage {
    pool: SqlitePool,
}

impl SettingsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the raw JSON text stored for a key, if any
    pub async fn get(&self, key: SettingKey) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.map(|row| row.try_get::<String, _>("value"))
            .transpose()
            .map_err(StorageError::Sqlx)
    }

    /// Get every stored slot as (key, raw JSON) pairs, skipping unknown keys
    pub async fn get_all(&self) -> Result<Vec<(SettingKey, String)>, StorageError> {
        let rows = sqlx::query("SELECT key, value FROM settings ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut slots = Vec::with_capacity(rows.len());
        for row in rows {
            let key: String = row.try_get("key").map_err(StorageError::Sqlx)?;
            let value: String = row.try_get("value").map_err(StorageError::Sqlx)?;
            match key.parse::<SettingKey>() {
                Ok(key) => slots.push((key, value)),
                Err(_) => debug!("Ignoring unrecognised settings slot: {}", key),
            }
        }

        Ok(slots)
    }

    /// Write a slot, replacing any previous value
    pub async fn put(&self, key: SettingKey, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now', 'utc')",
        )
        .bind(key.as_str())
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(())
    }

    /// Delete a slot; returns whether one existed
    pub async fn delete(&self, key: SettingKey) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
