//! Error types for bistro-api

use axum::response::{IntoResponse, Redirect, Response};
use http::StatusCode;
use thiserror::Error;

/// Result type alias for bistro-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bistro-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from bistro-core
    #[error("Core error: {0}")]
    Core(#[from] bistro_core::Error),

    /// Error from bistro-storage
    #[error("Storage error: {0}")]
    Storage(#[from] bistro_storage::Error),

    /// A render context could not be serialised.
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    /// The request path names a record that does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind
        entity: &'static str,
        /// The id as it appeared in the path
        id: String,
    },

    /// A gated route was requested without an acting user.
    #[error("Authentication required for {next}")]
    Unauthenticated {
        /// Login page to send the client to, `next` already attached
        location: String,
        /// Path the client originally asked for
        next: String,
    },

    /// Configuration could not be read or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure, e.g. binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a not-found error for a path id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Error::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates an unauthenticated error redirecting to `login_url?next=<next>`.
    pub fn unauthenticated(login_url: &str, next: &str) -> Self {
        let separator = if login_url.contains('?') { '&' } else { '?' };
        let encoded: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
        Error::Unauthenticated {
            location: format!("{login_url}{separator}next={encoded}"),
            next: next.to_string(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Whether this error means the addressed record is absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Storage(err) => err.is_not_found(),
            Error::Core(bistro_core::Error::InvalidId { .. }) => true,
            _ => false,
        }
    }

    /// HTTP status this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            _ if self.is_not_found() => StatusCode::NOT_FOUND,
            Error::Unauthenticated { .. } => StatusCode::SEE_OTHER,
            Error::Storage(bistro_storage::Error::UnknownReference { .. }) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self.status().as_u16() {
            404 => "not_found",
            409 => "conflict",
            _ => "internal",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Unauthenticated { location, next } = &self {
            tracing::debug!(next = %next, "Redirecting anonymous request to login");
            return Redirect::to(location).into_response();
        }

        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": message,
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
