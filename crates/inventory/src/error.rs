//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on deterministic domain failures (validation,
/// identity conflicts, lookups). Transport concerns belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// A name or price failed validation (e.g. empty name, non-finite price).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A medicine with the same name (case-insensitive) already exists.
    #[error("medicine '{0}' already exists")]
    AlreadyExists(String),

    /// No medicine with the given name exists.
    #[error("medicine '{0}' not found")]
    NotFound(String),

    /// An aggregate was requested over an empty catalog.
    #[error("no medicines available to calculate the average")]
    EmptyCollection,
}

impl StoreError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
