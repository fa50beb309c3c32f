//! Core error types for focusflow-core.
//!
//! Recoverable user-facing failures (`AuthError`) are separated from
//! infrastructure failures (`StoreError`, `ConfigError`). Malformed
//! persisted records are deliberately NOT represented here: the storage
//! layer reports them as [`crate::storage::Loaded::Corrupt`] and every
//! caller substitutes its default.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Account/session errors surfaced to the user
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Recoverable account/session failures, surfaced to the caller for
/// user-facing messaging.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Another account already uses this email (after normalization)
    #[error("email is already in use")]
    EmailInUse,

    /// Password shorter than the minimum length
    #[error("password must be at least 8 characters")]
    WeakPassword,

    /// Unknown email or wrong password. The two cases are reported
    /// identically so callers cannot probe for account existence.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing store
    #[error("failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Store is locked by another process
    #[error("store is locked")]
    Locked,

    /// A record could not be serialized for writing
    #[error("failed to encode record under '{key}': {source}")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
