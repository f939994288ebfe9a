//! Shared handler state.

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use bistro_core::{Clock, SystemClock};
use bistro_forms::ValidationContext;
use bistro_storage::Store;

use crate::Result;
use crate::render::{JsonRenderer, Renderer};

/// Everything a handler needs, cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    /// Persistence.
    pub store: Arc<dyn Store>,
    /// Source of "now" for validation and the current-menu listing.
    pub clock: Arc<dyn Clock>,
    /// Produces responses for named views.
    pub renderer: Arc<dyn Renderer>,
    /// Where anonymous requests to gated pages are redirected.
    pub login_url: Arc<str>,
}

impl AppState {
    /// State over `store` with the system clock and JSON rendering.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            renderer: Arc::new(JsonRenderer),
            login_url: Arc::from("/accounts/login/"),
        }
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the login URL.
    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = Arc::from(login_url.into());
        self
    }

    /// The current moment according to the configured clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// A validation context pinned to [`now`](Self::now).
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::at(self.now())
    }

    /// Renders `view` with `context`.
    pub fn render<C: Serialize>(&self, view: &str, context: &C) -> Result<Response> {
        let context = serde_json::to_value(context)?;
        Ok(self.renderer.render(view, context))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("login_url", &self.login_url)
            .field("now", &self.now())
            .finish_non_exhaustive()
    }
}
