//! Token validator backed by a fixed token table.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::{AuthConfig, AuthError, AuthenticatedUser, TokenValidator};

/// Maps opaque tokens to users.
///
/// Suitable for deployments where an external login flow hands out
/// long-lived tokens, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenValidator {
    tokens: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenValidator {
    /// Creates a validator that knows no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` as identifying `user`.
    pub fn with_token<T: Into<String>>(mut self, token: T, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn lookup(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::BlankToken);
        }
        self.tokens.get(token).cloned().ok_or(AuthError::UnknownToken)
    }
}

impl<T: Into<String>> FromIterator<(T, AuthenticatedUser)> for StaticTokenValidator {
    fn from_iter<I: IntoIterator<Item = (T, AuthenticatedUser)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(token, user)| (token.into(), user))
                .collect(),
        }
    }
}

impl TokenValidator for StaticTokenValidator {
    fn validate(
        &self,
        token: &str,
        _config: &AuthConfig,
    ) -> Pin<Box<dyn Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>> {
        let result = self.lookup(token);
        Box::pin(async move { result })
    }
}
