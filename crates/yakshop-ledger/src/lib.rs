//! Append-only order ledger for the Yak Shop.
//!
//! Every committed order, full or partial, becomes one immutable
//! [`OrderRecord`] in the [`OrderLedger`]. The ledger is the source of truth
//! for how much milk and wool has already been promised to customers: the
//! fulfillment engine subtracts [`OrderLedger::cumulative_sold`] from the
//! herd's production before deciding on a new order.
//!
//! Records are never modified or deleted. A record booked against day `d`
//! counts toward every query for day `d` or later.
//!
//! # Usage
//!
//! ```
//! use rust_decimal::Decimal;
//! use yakshop_ledger::OrderLedger;
//!
//! let mut ledger = OrderLedger::new();
//! ledger.append(10, Decimal::new(1100, 0), 3, None).ok();
//!
//! assert_eq!(ledger.cumulative_sold(9).skins, 0);
//! assert_eq!(ledger.cumulative_sold(10).skins, 3);
//! assert_eq!(ledger.cumulative_sold(20).milk, Decimal::new(1100, 0));
//! ```
//!
//! [`OrderRecord`]: yakshop_types::OrderRecord

pub mod ledger;

// Re-export primary types at crate root.
pub use ledger::OrderLedger;

use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when recording ledger entries.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Milk quantity must not be negative.
    #[error("order milk quantity must not be negative, got {quantity}")]
    NegativeQuantity {
        /// The invalid quantity.
        quantity: Decimal,
    },

    /// An internal error that should not occur in normal operation.
    #[error("internal ledger error: {0}")]
    InternalError(&'static str),
}
