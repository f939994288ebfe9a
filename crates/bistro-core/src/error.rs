//! Error types for bistro-core

use thiserror::Error;

/// Result type alias for bistro-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bistro-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A textual identifier could not be parsed.
    #[error("Invalid {entity} id: '{value}'")]
    InvalidId {
        /// Entity kind the id was meant for
        entity: &'static str,
        /// The rejected input
        value: String,
    },
}

impl Error {
    /// Creates a new invalid-id error.
    pub fn invalid_id<S: Into<String>>(entity: &'static str, value: S) -> Self {
        Error::InvalidId {
            entity,
            value: value.into(),
        }
    }
}
