//! Axum router construction for the Yak Shop API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- HTML index
/// - `GET /yak-shop/stock/{day}` and `/yak-shop/stock/?day=` -- available stock
/// - `GET /yak-shop/herd/{day}` and `/yak-shop/herd/?day=` -- herd projection
/// - `POST /yak-shop/order/{day}` (JSON) and `/yak-shop/order/` (form) -- order placement
/// - `GET /health` -- liveness check
///
/// CORS allows any origin so a browser storefront on another port can call
/// the API.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/yak-shop/stock/", get(handlers::query_stock))
        .route("/yak-shop/stock/{day}", get(handlers::get_stock))
        .route("/yak-shop/herd/", get(handlers::query_herd))
        .route("/yak-shop/herd/{day}", get(handlers::get_herd))
        .route("/yak-shop/order/", post(handlers::place_form_order))
        .route("/yak-shop/order/{day}", post(handlers::place_order))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
