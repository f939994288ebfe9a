//! Caller identification for Bistro.
//!
//! [`AuthLayer`] reads a bearer token or session cookie, asks a
//! [`TokenValidator`] who it belongs to, and stores the resulting
//! [`AuthenticatedUser`] in the request extensions. Requests without a valid
//! token continue anonymously; handlers decide which operations need a user.
//! With [`AuthConfig::enabled`] off, every request acts as the dev user.

mod error;
mod middleware;
mod user;
mod validator;

pub use error::AuthError;
pub use middleware::{AuthLayer, AuthService};
pub use user::AuthenticatedUser;
pub use validator::StaticTokenValidator;

/// Default name of the session cookie carrying a token.
pub const DEFAULT_SESSION_COOKIE: &str = "bistro_session";

/// Configuration for the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Whether tokens are checked. When false, every request acts as `dev_user`.
    pub enabled: bool,
    /// Cookie consulted when no `Authorization` header is present.
    pub session_cookie: String,
    /// Acting user in dev mode.
    pub dev_user: AuthenticatedUser,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            dev_user: AuthenticatedUser::new("dev", "dev@localhost"),
        }
    }
}

/// Resolves an opaque token to the user it was issued to.
pub trait TokenValidator: Send + Sync + 'static {
    /// Looks up `token`, a bearer header value or session cookie.
    ///
    /// Fails with an [`AuthError`] when the token identifies no one; the
    /// middleware then lets the request through anonymously.
    fn validate(
        &self,
        token: &str,
        config: &AuthConfig,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    >;
}
