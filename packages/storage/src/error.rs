// ABOUTME: Error types for storage operations
// ABOUTME: Wraps SQLite, filesystem, and JSON failures without translating them

use std::sync::Arc;

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A database open attempt failed. Every caller that awaited the same
    /// attempt receives the same underlying error.
    #[error("Failed to open database: {0}")]
    Open(Arc<sqlx::Error>),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
