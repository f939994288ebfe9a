//! Tower identification middleware.
//!
//! [`AuthLayer`] wraps an inner service with [`AuthService`], which works out
//! who is calling before forwarding the request. It never rejects: handlers
//! see an [`AuthenticatedUser`] in the request extensions, or nothing, and
//! decide for themselves.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, Request, header};
use tower::{Layer, Service};

use crate::{AuthConfig, AuthenticatedUser, TokenValidator};

/// Layer producing [`AuthService`].
#[derive(Clone)]
pub struct AuthLayer<V: TokenValidator> {
    identity: Identity<V>,
}

impl<V: TokenValidator> AuthLayer<V> {
    /// Identifies callers with `validator`, honouring `config`.
    pub fn new(validator: Arc<V>, config: AuthConfig) -> Self {
        Self {
            identity: Identity { validator, config },
        }
    }
}

impl<V: TokenValidator, S> Layer<S> for AuthLayer<V> {
    type Service = AuthService<V, S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            identity: self.identity.clone(),
        }
    }
}

/// Service attaching the caller's identity to each request.
#[derive(Clone)]
pub struct AuthService<V: TokenValidator, S> {
    inner: S,
    identity: Identity<V>,
}

struct Identity<V: TokenValidator> {
    validator: Arc<V>,
    config: AuthConfig,
}

// Manual impl: `V` itself need not be `Clone`.
impl<V: TokenValidator> Clone for Identity<V> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}

impl<V: TokenValidator> Identity<V> {
    /// The acting user for a request carrying `headers`, if any.
    async fn resolve(&self, headers: &HeaderMap) -> Option<AuthenticatedUser> {
        if !self.config.enabled {
            return Some(self.config.dev_user.clone());
        }
        let token = presented_token(headers, &self.config.session_cookie)?;
        match self.validator.validate(token, &self.config).await {
            Ok(user) => {
                log::debug!("Identified caller as {}", user.subject);
                Some(user)
            }
            Err(err) => {
                log::warn!("Ignoring rejected token: {err}");
                None
            }
        }
    }
}

impl<V, S> Service<Request<Body>> for AuthService<V, S>
where
    V: TokenValidator,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        // The readied service goes into the future; a fresh clone stays behind.
        let fresh = self.inner.clone();
        let mut ready = std::mem::replace(&mut self.inner, fresh);
        let identity = self.identity.clone();

        Box::pin(async move {
            if let Some(user) = identity.resolve(req.headers()).await {
                req.extensions_mut().insert(user);
            }
            let Ok(resp) = ready.call(req).await;
            Ok(resp.into_response())
        })
    }
}

/// The bearer token, or failing that the session cookie value.
fn presented_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    bearer_token(headers).or_else(|| session_cookie(headers, cookie_name))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn session_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
}
