//! # bistro-api
//!
//! HTTP server for Bistro.
//!
//! This crate provides:
//! - Page handlers for menus, items, and ingredients
//! - The [`Renderer`](render::Renderer) seam turning view names into responses
//! - Layered configuration ([`BistroConfig`])
//! - Error-to-response mapping (404, login redirect, 500)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use config::BistroConfig;
pub use error::{Error, Result};
pub use extract::CurrentUser;
pub use render::{JsonRenderer, Renderer};
pub use server::{Server, app};
pub use state::AppState;
