//! HTTP server for the lab website.
//!
//! One process serves the rendered page, the publications endpoints and the
//! embedded assets. Each visitor's publications panel is kept in a
//! [`session::SessionManager`] keyed by a cookie.

pub mod routes;
pub mod session;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use crate::client::{PublicationSource, ScholarClient};
use crate::config::Config;
use crate::contact::{ContactBackend, SimulatedBackend};

pub use routes::{AppState, create_router};

/// The website server.
pub struct SiteServer {
    state: Arc<AppState>,
    static_dir: Option<PathBuf>,
}

impl SiteServer {
    /// Create a server talking to Semantic Scholar with the simulated contact backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let source = Arc::new(ScholarClient::new(&config)?);
        let contact = Arc::new(SimulatedBackend::new(config.contact_delay));
        Ok(Self::with_backends(config, source, contact))
    }

    /// Create a server with explicit backends.
    #[must_use]
    pub fn with_backends(
        config: Config,
        source: Arc<dyn PublicationSource>,
        contact: Arc<dyn ContactBackend>,
    ) -> Self {
        Self { state: Arc::new(AppState::new(config, source, contact)), static_dir: None }
    }

    /// Serve files from `dir` under `/static`.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Build the router without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.state), self.static_dir.as_deref())
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for SiteServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteServer")
            .field("state", &self.state)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
