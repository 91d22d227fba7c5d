//! Error types for FolioDB
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type for FolioDB operations
#[derive(Debug, Error)]
pub enum FolioError {
    // -------------------------------------------------------------------------
    // Validation Errors (raised before touching the filesystem)
    // -------------------------------------------------------------------------
    #[error("missing collection - unable to {op} record (no collection name)")]
    MissingCollection { op: &'static str },

    #[error("missing resource - unable to {op} record (no resource name)")]
    MissingResource { op: &'static str },

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("unable to find file or directory named {path}")]
    NotFound { path: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// True for missing/invalid collection or resource names
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FolioError::MissingCollection { .. }
                | FolioError::MissingResource { .. }
                | FolioError::InvalidName { .. }
        )
    }

    /// True when the addressed collection or resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound { .. })
    }
}
