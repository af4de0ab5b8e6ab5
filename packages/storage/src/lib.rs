// ABOUTME: Data layer and persistence for decomp tooling
// ABOUTME: SQLite connection management, migrations, and storage errors

pub mod sqlite;

use thiserror::Error;

pub use sqlite::{connect, connect_default, connect_in_memory};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
