//! Error types for valgraph
//!
//! Lookup failures are recoverable; schema violations are programming errors
//! that are reported before any storage is touched.

use thiserror::Error;

/// The main error type for valgraph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ========== Vertex Errors ==========
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: String, vertex_count: usize },

    #[error("Vertex capacity exceeded: {0}")]
    CapacityExceeded(String),

    // ========== Lookup Errors ==========
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Uninitialized value: {0}")]
    Uninitialized(String),

    // ========== Schema Errors ==========
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    // ========== Internal Errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for valgraph operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::TypeMismatch`] from anything printable
    pub fn type_mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Returns true if the caller can handle this error locally
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidVertex { .. }
                | Error::EdgeNotFound(_)
                | Error::KeyNotFound(_)
                | Error::Uninitialized(_)
        )
    }

    /// Returns true if an edge or a value key could not be resolved
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EdgeNotFound(_) | Error::KeyNotFound(_))
    }

    /// Returns true if a value tuple disagreed with the declared schema
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Error::SchemaMismatch(_) | Error::TypeMismatch { .. })
    }
}
