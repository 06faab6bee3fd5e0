//! Error types for bibliographic record operations.
//!
//! This module provides the [`BibError`] type for every fallible operation in the
//! crate and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all bibliographic record operations.
///
/// Read accessors on [`Bib`](crate::Bib) never fail; errors come from input
/// validation, library lookups, MARC record construction and serialization.
#[derive(Error, Debug)]
pub enum BibError {
    /// A metadata value does not have the shape its template key requires.
    #[error("Type validation failed for '{key}': {reason}")]
    TypeValidation {
        /// Metadata key that failed validation
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A library code is not present in the library registry.
    #[error("Unknown library code: '{0}'")]
    Lookup(String),

    /// Error indicating an invalid or malformed MARC record.
    #[error("Invalid MARC record: {0}")]
    InvalidRecord(String),

    /// Error indicating an invalid leader (24-byte header).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// Error indicating an invalid field structure.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// JSON serialization or parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BibError {
    /// Build a [`BibError::TypeValidation`] for `key`.
    pub(crate) fn type_validation(key: &str, reason: impl Into<String>) -> Self {
        BibError::TypeValidation {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`BibError`].
pub type Result<T> = std::result::Result<T, BibError>;
