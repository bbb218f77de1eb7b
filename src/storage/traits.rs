//! Storage traits and error types
//!
//! This module defines the trait interface for image sinks and the
//! associated error type.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for downloaded image bytes
///
/// The namespace is flat. Storing a name that already exists replaces the
/// previous contents; implementations do not detect or resolve collisions.
/// Implementations must be usable from many tasks at once.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `bytes` under `file_name`, replacing any existing entry
    ///
    /// # Returns
    ///
    /// The location the bytes were written to
    async fn store(&self, file_name: &str, bytes: &[u8]) -> StorageResult<PathBuf>;
}
