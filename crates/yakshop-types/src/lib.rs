//! Shared type definitions for the Yak Shop.
//!
//! This crate is the single source of truth for the types exchanged between
//! the herd simulation, the order ledger, and the HTTP API. Types flow
//! downstream to `TypeScript` via `ts-rs` for front-end consumers.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for ledger records
//! - [`enums`] -- [`Sex`] and [`OrderStatus`]
//! - [`structs`] -- The herd member, ledger records, stock and herd projections

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{OrderStatus, Sex};
pub use ids::OrderId;
pub use structs::{AvailableStock, FulfillmentOutcome, HerdMemberView, OrderRecord, Stock, Yak};
