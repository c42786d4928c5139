//! HTTP server lifecycle

use shared::error::SystemError;

use crate::api;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for tests and embedding)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Serve until SIGINT/SIGTERM, then drain within the shutdown timeout
    pub async fn run(self) -> Result<(), SystemError> {
        let state = match self.state {
            Some(s) => s,
            None => ServerState::initialize(&self.config).await?,
        };

        let router = api::router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.server_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| SystemError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("HRMS server listening on {addr}");

        let drain = std::time::Duration::from_millis(self.config.shutdown_timeout_ms);
        let serve = async {
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await
        };

        // Bounded drain: once the signal fires, in-flight requests get the
        // configured period before the process exits anyway.
        tokio::select! {
            result = serve => {
                result.map_err(|e| SystemError::internal(format!("Server error: {e}")))?;
            }
            _ = async {
                shutdown_signal().await;
                tokio::time::sleep(drain).await;
            } => {
                tracing::warn!("Drain period elapsed, forcing shutdown");
            }
        }

        tracing::info!("Server exiting");
        Ok(())
    }
}

/// Resolves on SIGINT (Ctrl-C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down server...");
}
