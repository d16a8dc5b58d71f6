//! Stock oracle, order fulfillment, and shop assembly for the Yak Shop.
//!
//! This crate sits on top of the pure herd simulation and the order ledger.
//! It answers "what is on the shelf at day `T`" and decides how much of an
//! order can be honored.
//!
//! # Modules
//!
//! - [`stock`] -- Produced and available stock, and the herd display
//!   projection.
//! - [`fulfillment`] -- The four-way grant decision and ledger booking.
//! - [`shop`] -- [`Shop`], owning one herd and its ledger.
//! - [`config`] -- Configuration loading from `yakshop-config.yaml` into
//!   strongly-typed structs.
//! - [`herd_file`] -- Herd snapshot loading from YAML.
//! - [`error`] -- [`ShopError`].

pub mod config;
pub mod error;
pub mod fulfillment;
pub mod herd_file;
pub mod shop;
pub mod stock;

pub use config::{ConfigError, ShopConfig};
pub use error::ShopError;
pub use fulfillment::{OrderRequest, decide, fulfill};
pub use herd_file::{HerdFileError, load_herd, parse_herd};
pub use shop::Shop;
pub use stock::{available_stock, display_liters, herd_view, stock};
pub use yakshop_herd::{Herd, HerdError};
