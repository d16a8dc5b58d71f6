//! Stock oracle: what the herd has produced by a given day.
//!
//! [`stock`] composes the milk and wool accruals into a single snapshot at
//! day `T`. Both accruals replay the herd from day 0, so the result depends
//! only on the herd and `T`.

use rust_decimal::Decimal;
use yakshop_herd::{Herd, HerdError, milk_yield, wool_yield};
use yakshop_ledger::OrderLedger;
use yakshop_types::{AvailableStock, HerdMemberView, Stock};

/// Total milk and wool the herd has produced over `day` days.
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] for a negative `day`.
pub fn stock(herd: &Herd, day: i64) -> Result<Stock, HerdError> {
    let milk = milk_yield(herd, day)?;
    let wool = wool_yield(herd, day)?;
    Ok(Stock::new(milk.liters, wool.skins))
}

/// Produced stock minus everything the ledger has committed up to `day`.
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] for a negative `day`.
pub fn available_stock(
    herd: &Herd,
    ledger: &OrderLedger,
    day: i64,
) -> Result<AvailableStock, HerdError> {
    let produced = stock(herd, day)?;
    let sold = ledger.cumulative_sold(yakshop_herd::simulation_days(day)?);
    Ok(AvailableStock {
        milk: produced.milk.saturating_sub(sold.milk),
        skins: i64::from(produced.skins).saturating_sub(i64::from(sold.skins)),
    })
}

/// Display projection of the herd after `day` days.
///
/// Ages are normalized (`4.00` is reported as `4`).
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] for a negative `day`.
pub fn herd_view(herd: &Herd, day: i64) -> Result<Vec<HerdMemberView>, HerdError> {
    let wool = wool_yield(herd, day)?;
    Ok(herd
        .iter()
        .zip(wool.projections)
        .map(|(yak, projection)| HerdMemberView {
            name: yak.name.clone(),
            age: projection.elapsed_age.normalize(),
            age_last_shaved: projection.age_last_shaved.map(|age| age.normalize()),
        })
        .collect())
}

/// Normalize a milk total for display.
pub fn display_liters(liters: Decimal) -> Decimal {
    liters.normalize()
}
