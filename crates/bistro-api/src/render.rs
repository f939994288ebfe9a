//! Turning a view name and its context into a response.
//!
//! Handlers never build page markup themselves. They name a view (for
//! example `menu/menu_detail.html`) and hand over a serialisable context;
//! the configured [`Renderer`] decides what the client receives.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

/// Produces a response for a named view.
pub trait Renderer: Send + Sync + 'static {
    /// Render `view` with an already-serialised `context`.
    fn render(&self, view: &str, context: Value) -> Response;
}

/// Renders every view as `{"view": <name>, "context": <ctx>}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &str, context: Value) -> Response {
        Json(Page { view, context }).into_response()
    }
}

#[derive(Serialize)]
struct Page<'a> {
    view: &'a str,
    context: Value,
}
