//! Request extractors shared by the route handlers.

use axum::extract::FromRequestParts;
use http::request::Parts;
use std::str::FromStr;

use bistro_auth::AuthenticatedUser;

use crate::{AppState, Error};

/// The acting user of a gated route.
///
/// Rejects anonymous requests with [`Error::Unauthenticated`], which is
/// answered with a redirect to the login page carrying the requested path
/// as `next`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match AuthenticatedUser::from_extensions(&parts.extensions) {
            Some(user) => Ok(CurrentUser(user.clone())),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or("/");
                Err(Error::unauthenticated(&state.login_url, next))
            }
        }
    }
}

/// Parses a path segment into a record id; anything non-numeric is not found.
pub fn parse_id<T>(raw: &str) -> Result<T, Error>
where
    T: FromStr<Err = bistro_core::Error>,
{
    raw.parse().map_err(|err| match err {
        bistro_core::Error::InvalidId { entity, value } => Error::not_found(entity, value),
        other => Error::Core(other),
    })
}
