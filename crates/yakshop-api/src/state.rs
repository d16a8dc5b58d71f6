//! Shared application state for the Yak Shop API.

use tokio::sync::RwLock;
use yakshop_core::Shop;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Queries take the read lock; placing an order takes the write
/// lock so that reading availability and booking the grant happen as one
/// step.
#[derive(Debug)]
pub struct AppState {
    /// The shop: herd plus order ledger.
    pub shop: RwLock<Shop>,
    /// Largest day offset accepted by any endpoint.
    pub max_day: u32,
}

impl AppState {
    /// Wrap a shop for serving.
    pub fn new(shop: Shop, max_day: u32) -> Self {
        Self {
            shop: RwLock::new(shop),
            max_day,
        }
    }
}
