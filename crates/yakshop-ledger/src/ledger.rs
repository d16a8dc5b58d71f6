//! The order ledger: an append-only log of committed orders.
//!
//! # Design
//!
//! - **Append-only**: records are never modified or deleted.
//! - **Day-scoped sums**: [`OrderLedger::cumulative_sold`] counts every
//!   record booked on or before the queried day.
//! - **Precision**: milk uses [`Decimal`]; skins are whole units.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use yakshop_types::{OrderId, OrderRecord, Stock};

use crate::LedgerError;

/// The ledger of every order the shop has committed to.
#[derive(Debug, Default, Clone)]
pub struct OrderLedger {
    /// All records, in insertion order.
    entries: Vec<OrderRecord>,
}

impl OrderLedger {
    /// Create a new empty ledger.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return the number of records in the ledger.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the ledger has no records.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a committed order.
    ///
    /// Zero quantities are accepted: a partial grant books zero for the side
    /// it could not satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NegativeQuantity`] if `milk` is negative.
    pub fn append(
        &mut self,
        day: u32,
        milk: Decimal,
        skins: u32,
        customer: Option<String>,
    ) -> Result<&OrderRecord, LedgerError> {
        if milk < Decimal::ZERO {
            return Err(LedgerError::NegativeQuantity { quantity: milk });
        }

        let record = OrderRecord {
            id: OrderId::new(),
            day,
            milk,
            skins,
            customer,
            created_at: Utc::now(),
        };
        debug!(order_id = %record.id, day, %milk, skins, "order recorded");
        self.entries.push(record);

        // Return a reference to the record we just pushed.
        self.entries.last().ok_or(LedgerError::InternalError(
            "failed to retrieve record after append",
        ))
    }

    /// Total milk and skins committed on or before `day`.
    pub fn cumulative_sold(&self, day: u32) -> Stock {
        self.entries
            .iter()
            .filter(|record| record.day <= day)
            .fold(Stock::empty(), |sold, record| Stock {
                milk: sold.milk.saturating_add(record.milk),
                skins: sold.skins.saturating_add(record.skins),
            })
    }

    /// Return the most recent `count` records, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &OrderRecord> {
        self.entries.iter().rev().take(count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_ledger_is_empty() {
        let ledger = OrderLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.cumulative_sold(100), Stock::empty());
    }

    #[test]
    fn append_returns_the_record() {
        let mut ledger = OrderLedger::new();
        let record = ledger.append(14, dec!(1100), 3, Some(String::from("Medvedev")));
        assert!(record.is_ok());
        if let Ok(record) = record {
            assert_eq!(record.day, 14);
            assert_eq!(record.milk, dec!(1100));
            assert_eq!(record.skins, 3);
            assert_eq!(record.customer.as_deref(), Some("Medvedev"));
        }
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn zero_quantities_are_recorded() {
        let mut ledger = OrderLedger::new();
        assert!(ledger.append(5, Decimal::ZERO, 2, None).is_ok());
        assert!(ledger.append(5, dec!(12.5), 0, None).is_ok());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.cumulative_sold(5), Stock::new(dec!(12.5), 2));
    }

    #[test]
    fn negative_milk_rejected() {
        let mut ledger = OrderLedger::new();
        let result = ledger.append(1, dec!(-5), 0, None);
        assert!(matches!(result, Err(LedgerError::NegativeQuantity { .. })));
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn cumulative_sold_respects_the_day_bound() {
        let mut ledger = OrderLedger::new();
        let _ = ledger.append(3, dec!(10), 1, None);
        let _ = ledger.append(7, dec!(20.5), 2, None);
        let _ = ledger.append(7, dec!(1), 0, None);

        assert_eq!(ledger.cumulative_sold(0), Stock::empty());
        assert_eq!(ledger.cumulative_sold(3), Stock::new(dec!(10), 1));
        assert_eq!(ledger.cumulative_sold(6), Stock::new(dec!(10), 1));
        assert_eq!(ledger.cumulative_sold(7), Stock::new(dec!(31.5), 3));
        assert_eq!(ledger.cumulative_sold(1000), Stock::new(dec!(31.5), 3));
    }

    #[test]
    fn appended_amounts_count_exactly_once() {
        let mut ledger = OrderLedger::new();
        let before = ledger.cumulative_sold(9);
        let _ = ledger.append(9, dec!(42), 4, None);

        let after = ledger.cumulative_sold(9);
        assert_eq!(after.milk, before.milk + dec!(42));
        assert_eq!(after.skins, before.skins + 4);
        assert_eq!(ledger.cumulative_sold(10), after);
    }

    #[test]
    fn recent_lists_newest_first() {
        let mut ledger = OrderLedger::new();
        let _ = ledger.append(1, dec!(5), 0, None);
        let _ = ledger.append(2, dec!(3), 1, None);
        let _ = ledger.append(2, dec!(1), 1, None);

        let milk: Vec<Decimal> = ledger.recent(2).map(|r| r.milk).collect();
        assert_eq!(milk, vec![dec!(1), dec!(3)]);
        assert_eq!(ledger.recent(10).count(), 3);
        assert_eq!(OrderLedger::new().recent(5).count(), 0);
    }

    proptest! {
        #[test]
        fn cumulative_sold_is_monotonic_in_day(
            orders in proptest::collection::vec((0u32..50, 0i64..10_000, 0u32..20), 0..20),
            day in 0u32..60,
        ) {
            let mut ledger = OrderLedger::new();
            for (d, milk, skins) in orders {
                let _ = ledger.append(d, Decimal::new(milk, 1), skins, None);
            }

            let today = ledger.cumulative_sold(day);
            let tomorrow = ledger.cumulative_sold(day + 1);
            prop_assert!(tomorrow.milk >= today.milk);
            prop_assert!(tomorrow.skins >= today.skins);
        }
    }
}
