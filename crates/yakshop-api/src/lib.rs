//! HTTP API for the Yak Shop.
//!
//! This crate exposes a [`Shop`](yakshop_core::Shop) over an Axum server:
//!
//! - **Stock** (`GET /yak-shop/stock/{day}`): milk and skins still on
//!   offer at a day, net of orders already placed.
//! - **Herd** (`GET /yak-shop/herd/{day}`): each yak's age and age at last
//!   shave after a number of days.
//! - **Orders** (`POST /yak-shop/order/{day}`): `201` when fully granted,
//!   `206` when partially granted, `404` when nothing could be granted.
//!
//! The read endpoints also take the day as `?day=`, and orders may be
//! posted as form fields to `/yak-shop/order/`.
//!
//! Day offsets outside `0..=max_day` and malformed bodies are answered with
//! `400` before they reach the shop.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, bind, serve, start_server};
pub use state::AppState;
