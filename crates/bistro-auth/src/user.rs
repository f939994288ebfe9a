//! The identity a request acts as.

use bistro_core::UserId;
use http::Extensions;
use serde::{Deserialize, Serialize};

/// A caller the middleware has identified.
///
/// Lives in the request extensions; absent for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Stable identifier, recorded as the chef of authored items.
    pub subject: String,
    /// Contact address, shown only in logs.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates an identity for `subject`.
    pub fn new(subject: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
        }
    }

    /// The subject as the id stored on authored items.
    pub fn user_id(&self) -> UserId {
        UserId::new(self.subject.as_str())
    }

    /// The user attached to a request, if it was identified.
    pub fn from_extensions(extensions: &Extensions) -> Option<&Self> {
        extensions.get::<Self>()
    }
}
