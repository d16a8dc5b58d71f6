//! Listener setup and the serve loop.
//!
//! [`bind`] and [`serve`] are split so callers (and tests) can bind an
//! ephemeral port, learn its address, and stop the loop with their own
//! shutdown future. [`start_server`] chains the two and stops on `Ctrl-C`.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use yakshop_core::config::ServerSection;

use crate::router::build_router;
use crate::state::AppState;

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured host and port could not be bound.
    #[error("cannot listen on {host}:{port}: {source}")]
    Bind {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The serve loop stopped with an I/O error.
    #[error("serve loop failed: {source}")]
    Serve {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Bind the listener described by the `server` config section.
///
/// The host may be an IP address or a resolvable name. Port `0` picks an
/// ephemeral port.
pub async fn bind(section: &ServerSection) -> Result<TcpListener, ServerError> {
    TcpListener::bind((section.host.as_str(), section.port))
        .await
        .map_err(|source| ServerError::Bind {
            host: section.host.clone(),
            port: section.port,
            source,
        })
}

/// Serve the shop on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, max_day = state.max_day, "yak shop listening");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("yak shop stopped");
    Ok(())
}

/// Bind from config and serve until `Ctrl-C`.
pub async fn start_server(section: &ServerSection, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = bind(section).await?;
    serve(listener, state, ctrl_c()).await
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "no Ctrl-C handler, serving until killed");
        std::future::pending::<()>().await;
    }
}
