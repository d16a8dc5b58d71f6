//! Error types for the `yakshop-core` crate.
//!
//! [`ShopError`] wraps the errors of the simulation and ledger crates so
//! the shop's operations can propagate them with `?`. Rejected and partial
//! orders are outcomes, not errors, and never appear here.

use yakshop_herd::HerdError;
use yakshop_ledger::LedgerError;

/// Errors that can occur while querying stock or placing an order.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// The herd simulation failed (invalid day or arithmetic overflow).
    #[error("herd error: {source}")]
    Herd {
        /// The underlying herd error.
        #[from]
        source: HerdError,
    },

    /// The ledger refused to record an order.
    #[error("ledger error: {source}")]
    Ledger {
        /// The underlying ledger error.
        #[from]
        source: LedgerError,
    },
}

impl ShopError {
    /// Whether this error is a rejected day offset.
    pub const fn is_invalid_day(&self) -> bool {
        matches!(
            self,
            Self::Herd {
                source: HerdError::InvalidDay { .. }
            }
        )
    }
}
