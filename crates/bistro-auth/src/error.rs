//! Reasons a presented token is turned away.

/// Why a token did not identify anyone.
///
/// The middleware logs these and lets the request through anonymously.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The token was present but blank.
    #[error("blank token")]
    BlankToken,

    /// No user is registered under this token.
    #[error("unknown token")]
    UnknownToken,
}
