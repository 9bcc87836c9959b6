//! Error types shared across the nucascade workspace.

use thiserror::Error;

/// Errors from event-record manipulation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A particle names a first mother that is not in the record.
    #[error("mother index {mother} out of range for record of {len} entries")]
    MotherOutOfRange {
        /// The offending mother index.
        mother: usize,
        /// Record length at insertion time.
        len: usize,
    },
    /// An index does not refer to an entry of the record.
    #[error("index {index} out of range for record of {len} entries")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Record length.
        len: usize,
    },
}

/// Errors from configuration registry access.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required key is absent.
    #[error("missing configuration key '{0}'")]
    Missing(String),
    /// A key holds a value of the wrong type.
    #[error("configuration key '{key}' is not a {expected}")]
    WrongType {
        /// The key that was read.
        key: String,
        /// The expected value type.
        expected: &'static str,
    },
    /// The registry document could not be parsed.
    #[error("invalid registry document: {0}")]
    Json(#[from] serde_json::Error),
}
