//! Error types for bistro-storage

use thiserror::Error;

/// Result type alias for bistro-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bistro-storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Error from bistro-core
    #[error("Core error: {0}")]
    Core(#[from] bistro_core::Error),

    /// The addressed record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind
        entity: &'static str,
        /// Requested id
        id: u64,
    },

    /// A many-to-many association names a record that does not exist.
    #[error("Unknown {entity} {id} in association")]
    UnknownReference {
        /// Entity kind of the missing record
        entity: &'static str,
        /// The dangling id
        id: u64,
    },
}

impl Error {
    /// Creates a not-found error.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Error::NotFound { entity, id }
    }

    /// Creates an unknown-reference error.
    pub fn unknown_reference(entity: &'static str, id: u64) -> Self {
        Error::UnknownReference { entity, id }
    }

    /// Whether this error means the addressed record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
