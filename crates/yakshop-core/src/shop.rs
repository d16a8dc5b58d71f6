//! The [`Shop`]: one herd and the ledger of orders placed against it.

use yakshop_herd::Herd;
use yakshop_ledger::OrderLedger;
use yakshop_types::{AvailableStock, FulfillmentOutcome, HerdMemberView};

use crate::error::ShopError;
use crate::fulfillment::{OrderRequest, fulfill};
use crate::stock::{available_stock, herd_view};

/// A running shop.
///
/// The herd is fixed at construction; only the ledger grows. Callers that
/// share a `Shop` across tasks must serialize [`Shop::place_order`] against
/// itself, since it reads availability and then appends.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    herd: Herd,
    ledger: OrderLedger,
}

impl Shop {
    /// Open a shop with an empty ledger.
    pub const fn new(herd: Herd) -> Self {
        Self {
            herd,
            ledger: OrderLedger::new(),
        }
    }

    /// The herd snapshot.
    pub const fn herd(&self) -> &Herd {
        &self.herd
    }

    /// The order ledger.
    pub const fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Stock still on offer at `day`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Herd`] for a negative `day`.
    pub fn available_stock(&self, day: i64) -> Result<AvailableStock, ShopError> {
        Ok(available_stock(&self.herd, &self.ledger, day)?)
    }

    /// The herd as it looks after `day` days.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Herd`] for a negative `day`.
    pub fn herd_view(&self, day: i64) -> Result<Vec<HerdMemberView>, ShopError> {
        Ok(herd_view(&self.herd, day)?)
    }

    /// Place an order for `day`.
    ///
    /// # Errors
    ///
    /// See [`fulfill`].
    pub fn place_order(
        &mut self,
        day: i64,
        request: OrderRequest,
    ) -> Result<FulfillmentOutcome, ShopError> {
        fulfill(&self.herd, day, &mut self.ledger, request)
    }
}
