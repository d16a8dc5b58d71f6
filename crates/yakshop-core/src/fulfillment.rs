//! Order fulfillment: reconcile a request against unpromised stock.
//!
//! A request is checked side by side against what the herd has produced by
//! the order day minus what the ledger has already committed by that day.
//! The first matching rule wins:
//!
//! | Milk fits | Skins fit | Grant | Ledger entry | Status |
//! |-----------|-----------|-------|--------------|--------|
//! | yes | yes | both | `(day, milk, skins)` | `Fulfilled` |
//! | no | no | nothing | none | `Rejected` |
//! | yes | no | milk only | `(day, milk, 0)` | `Partial` |
//! | no | yes | skins only | `(day, 0, skins)` | `Partial` |

use rust_decimal::Decimal;
use tracing::info;
use yakshop_herd::{Herd, simulation_days};
use yakshop_ledger::OrderLedger;
use yakshop_types::{AvailableStock, FulfillmentOutcome, OrderStatus, Stock};

use crate::error::ShopError;
use crate::stock::available_stock;

/// A validated order request.
///
/// Quantities are non-negative by construction upstream; the HTTP layer
/// rejects anything else before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Liters of milk requested.
    pub milk: Decimal,
    /// Skins of wool requested.
    pub skins: u32,
    /// Customer name, recorded with the ledger entry.
    pub customer: Option<String>,
}

/// Decide what to grant given the available stock.
///
/// Pure: performs no ledger access.
pub fn decide(available: &AvailableStock, milk: Decimal, skins: u32) -> FulfillmentOutcome {
    let milk_fits = milk <= available.milk;
    let skins_fit = i64::from(skins) <= available.skins;

    match (milk_fits, skins_fit) {
        (true, true) => FulfillmentOutcome {
            granted: Stock::new(milk, skins),
            status: OrderStatus::Fulfilled,
        },
        (false, false) => FulfillmentOutcome {
            granted: Stock::empty(),
            status: OrderStatus::Rejected,
        },
        (true, false) => FulfillmentOutcome {
            granted: Stock::new(milk, 0),
            status: OrderStatus::Partial,
        },
        (false, true) => FulfillmentOutcome {
            granted: Stock::new(Decimal::ZERO, skins),
            status: OrderStatus::Partial,
        },
    }
}

/// Decide on an order for `day` and record the grant in the ledger.
///
/// Rejected orders leave the ledger untouched.
///
/// # Errors
///
/// Returns [`ShopError::Herd`] for an invalid day, or [`ShopError::Ledger`]
/// if the ledger refuses the grant.
pub fn fulfill(
    herd: &Herd,
    day: i64,
    ledger: &mut OrderLedger,
    request: OrderRequest,
) -> Result<FulfillmentOutcome, ShopError> {
    let order_day = simulation_days(day)?;
    let available = available_stock(herd, ledger, day)?;
    let outcome = decide(&available, request.milk, request.skins);

    info!(
        day,
        status = %outcome.status,
        requested_milk = %request.milk,
        requested_skins = request.skins,
        available_milk = %available.milk,
        available_skins = available.skins,
        "order decided"
    );

    if outcome.status != OrderStatus::Rejected {
        ledger.append(
            order_day,
            outcome.granted.milk,
            outcome.granted.skins,
            request.customer,
        )?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use yakshop_types::{Sex, Yak};

    use super::*;

    fn bettys() -> Herd {
        Herd::new(vec![
            Yak::new("Betty-1", dec!(4), Sex::Female),
            Yak::new("Betty-2", dec!(8), Sex::Female),
            Yak::new("Betty-3", dec!(9.5), Sex::Female),
        ])
        .unwrap_or_default()
    }

    fn request(milk: Decimal, skins: u32) -> OrderRequest {
        OrderRequest {
            milk,
            skins,
            customer: Some(String::from("Medvedev")),
        }
    }

    fn place(
        herd: &Herd,
        day: i64,
        ledger: &mut OrderLedger,
        milk: Decimal,
        skins: u32,
    ) -> FulfillmentOutcome {
        fulfill(herd, day, ledger, request(milk, skins)).unwrap_or(FulfillmentOutcome {
            granted: Stock::empty(),
            status: OrderStatus::Rejected,
        })
    }

    #[test]
    fn whole_order_is_fulfilled() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        let outcome = place(&herd, 14, &mut ledger, dec!(1100), 3);
        assert_eq!(outcome.status, OrderStatus::Fulfilled);
        assert_eq!(outcome.granted, Stock::new(dec!(1100), 3));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.cumulative_sold(14), Stock::new(dec!(1100), 3));
    }

    #[test]
    fn only_milk_is_delivered_when_wool_runs_short() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        let outcome = place(&herd, 14, &mut ledger, dec!(1200), 5);
        // 1188.81 liters and 4 skins available.
        assert_eq!(outcome.status, OrderStatus::Rejected);

        let outcome = place(&herd, 14, &mut ledger, dec!(1100), 5);
        assert_eq!(outcome.status, OrderStatus::Partial);
        assert_eq!(outcome.granted, Stock::new(dec!(1100), 0));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.recent(1).map(|r| r.skins).next(), Some(0));
        assert_eq!(ledger.cumulative_sold(14), Stock::new(dec!(1100), 0));
    }

    #[test]
    fn only_wool_is_delivered_when_milk_runs_short() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        let outcome = place(&herd, 14, &mut ledger, dec!(1200), 3);
        assert_eq!(outcome.status, OrderStatus::Partial);
        assert_eq!(outcome.granted, Stock::new(Decimal::ZERO, 3));
        assert_eq!(ledger.cumulative_sold(14), Stock::new(Decimal::ZERO, 3));
    }

    #[test]
    fn rejected_order_records_nothing() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        let outcome = place(&herd, 14, &mut ledger, dec!(5000), 10);
        assert_eq!(outcome.status, OrderStatus::Rejected);
        assert_eq!(outcome.granted, Stock::empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_skins_request_is_partial_not_rejected() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        let outcome = place(&herd, 14, &mut ledger, dec!(1000000), 0);
        assert_eq!(outcome.status, OrderStatus::Partial);
        assert_eq!(outcome.granted, Stock::empty());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn earlier_sales_reduce_availability() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();

        assert_eq!(
            place(&herd, 13, &mut ledger, dec!(1100), 3).status,
            OrderStatus::Fulfilled
        );
        // 4.48 liters and no skins left on day 13.
        let outcome = place(&herd, 13, &mut ledger, dec!(5), 1);
        assert_eq!(outcome.status, OrderStatus::Rejected);

        // Day 14 adds 84.33 liters and one skin.
        let outcome = place(&herd, 14, &mut ledger, dec!(88.81), 1);
        assert_eq!(outcome.status, OrderStatus::Fulfilled);
        let outcome = place(&herd, 14, &mut ledger, dec!(0.01), 0);
        assert_eq!(outcome.status, OrderStatus::Partial);
    }

    #[test]
    fn invalid_day_is_an_error() {
        let herd = bettys();
        let mut ledger = OrderLedger::new();
        let result = fulfill(&herd, -1, &mut ledger, request(dec!(1), 0));
        assert!(result.as_ref().is_err_and(ShopError::is_invalid_day));
        assert!(ledger.is_empty());
    }

    proptest! {
        #[test]
        fn status_follows_the_availability_table(
            available_milk in 0i64..10_000,
            available_skins in -5i64..20,
            milk in 0i64..10_000,
            skins in 0u32..20,
        ) {
            let available = AvailableStock {
                milk: Decimal::new(available_milk, 1),
                skins: available_skins,
            };
            let milk = Decimal::new(milk, 1);
            let outcome = decide(&available, milk, skins);

            let milk_fits = milk <= available.milk;
            let skins_fit = i64::from(skins) <= available.skins;
            let expected = if milk_fits && skins_fit {
                OrderStatus::Fulfilled
            } else if !milk_fits && !skins_fit {
                OrderStatus::Rejected
            } else {
                OrderStatus::Partial
            };
            prop_assert_eq!(outcome.status, expected);
        }
    }
}
