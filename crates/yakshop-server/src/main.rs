//! Yak Shop server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `yakshop-config.yaml` (or the path in
//!    `YAKSHOP_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Load the herd snapshot
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use yakshop_api::AppState;
use yakshop_core::config::LoggingConfig;
use yakshop_core::{Shop, ShopConfig, load_herd};

use crate::error::ServerError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "yakshop-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration or herd cannot be loaded, or the
/// server cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = std::env::var("YAKSHOP_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = ShopConfig::load_or_default(&config_path).map_err(ServerError::from)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        config = %config_path.display(),
        herd = %config.herd.path.display(),
        max_day = config.shop.max_day,
        "yakshop-server starting"
    );

    // 3. Load the herd.
    let herd = load_herd(&config.herd.path).map_err(ServerError::from)?;
    let state = Arc::new(AppState::new(Shop::new(herd), config.shop.max_day));

    // 4. Serve.
    yakshop_api::start_server(&config.server, state)
        .await
        .map_err(ServerError::from)?;

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
