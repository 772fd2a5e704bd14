//! Error types for sync domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The difficulty value is outside the fixed enumeration.
    #[error("invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// The character attribute value is outside the fixed enumeration.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// The synchronisation status value is unknown.
    #[error("invalid sync status: {0}")]
    InvalidSyncStatus(String),
}
