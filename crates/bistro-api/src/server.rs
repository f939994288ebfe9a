//! API server implementation

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use bistro_auth::{AuthConfig, AuthLayer, TokenValidator};
use bistro_storage::Store;

use crate::config::BistroConfig;
use crate::{AppState, Result, routes};

/// Builds the full application: page routes behind identification and
/// request tracing.
pub fn app<V>(state: AppState, validator: Arc<V>, auth: AuthConfig) -> Router
where
    V: TokenValidator + Clone,
{
    routes::router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(AuthLayer::new(validator, auth)),
    )
}

/// Bistro HTTP server.
pub struct Server {
    config: BistroConfig,
    state: AppState,
}

impl Server {
    /// Creates a server over `store` using `config` for auth and binding.
    pub fn new(config: BistroConfig, store: Arc<dyn Store>) -> Self {
        let state = AppState::new(store).with_login_url(config.auth.login_url.clone());
        Self { config, state }
    }

    /// The router this server will serve.
    pub fn router(&self) -> Router {
        app(
            self.state.clone(),
            Arc::new(self.config.token_validator()),
            self.config.auth_config(),
        )
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.server.bind).await?;
        self.serve(listener).await
    }

    /// Serves on an already-bound listener until Ctrl-C.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let addr = listener.local_addr()?;
        if !self.config.auth.enabled {
            tracing::warn!(
                user = %self.config.auth.dev_user.subject,
                "Authentication disabled; every request acts as the dev user"
            );
        }
        tracing::info!(%addr, "Bistro listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Bistro stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
