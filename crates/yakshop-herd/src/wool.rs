//! Wool accrual: a discrete-event shave simulation.
//!
//! Each yak carries a shave accumulator that starts at zero and grows by
//! `8 + 0.01 * age_days` per simulated step, so older yaks regrow wool more
//! slowly. A yak can be shaved on a step while it is alive and its
//! accumulator is below `day - 1`; every shave yields one skin.
//!
//! Yaks already at or past the death threshold at day 0 never enter the
//! simulation. Instead, once at least one day has elapsed, they add a
//! one-time past-due correction of `age_days - MAX_AGE_DAYS` skins each.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{HerdError, overflow};
use crate::yak::{
    Herd, MAX_AGE_DAYS, YEARS_PER_DAY, YakProjection, age_days, elapsed_age, is_alive,
    simulation_days,
};

/// Fixed part of the shave accumulator growth per step.
pub const SHAVE_BASE_INTERVAL: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Accumulator growth per age-day per step.
pub const SHAVE_INTERVAL_PER_AGE_DAY: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Cumulative wool over a day range plus the per-yak projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WoolAccrual {
    /// Total skins produced over the range, including the past-due
    /// correction.
    pub skins: u32,
    /// Elapsed age and last-shave age of every yak, in snapshot order.
    pub projections: Vec<YakProjection>,
}

/// Per-yak shave state for one replay.
#[derive(Debug, Clone, Copy)]
struct ShaveState {
    /// Mirrors the yak's aging in age-days.
    age: u32,
    /// Shave accumulator.
    accumulator: Decimal,
    /// Accumulator value at the most recent shave.
    last_shaved: Decimal,
}

impl ShaveState {
    fn new(age: u32) -> Self {
        Self {
            age,
            accumulator: Decimal::ZERO,
            // Never shaved yet: one age-day before the first step.
            last_shaved: Decimal::from(age).saturating_sub(Decimal::ONE),
        }
    }

    fn can_shave(&self, horizon: Decimal) -> bool {
        is_alive(self.age) && self.accumulator < horizon
    }

    fn advance(&mut self) -> Result<(), HerdError> {
        let growth = SHAVE_INTERVAL_PER_AGE_DAY
            .checked_mul(Decimal::from(self.age))
            .and_then(|g| g.checked_add(SHAVE_BASE_INTERVAL))
            .ok_or_else(|| overflow("shave interval"))?;
        self.accumulator = self
            .accumulator
            .checked_add(growth)
            .ok_or_else(|| overflow("shave accumulator"))?;
        self.age = self.age.checked_add(1).ok_or_else(|| overflow("wool aging"))?;
        Ok(())
    }
}

/// Compute the cumulative wool skins produced by the herd over `day` days.
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] for a negative `day`, or
/// [`HerdError::ArithmeticOverflow`] on overflow.
pub fn wool_yield(herd: &Herd, day: i64) -> Result<WoolAccrual, HerdError> {
    let days = simulation_days(day)?;

    let mut skins: u32 = 0;
    let mut states: Vec<Option<ShaveState>> = Vec::with_capacity(herd.len());
    for yak in herd {
        let age = age_days(yak)?;
        if is_alive(age) {
            states.push(Some(ShaveState::new(age)));
        } else {
            // No days elapsed means nothing is due yet.
            let past_due = if days == 0 {
                0
            } else {
                age.saturating_sub(MAX_AGE_DAYS)
            };
            skins = skins
                .checked_add(past_due)
                .ok_or_else(|| overflow("past-due skins"))?;
            states.push(None);
        }
    }

    let horizon = Decimal::from(days).saturating_sub(Decimal::ONE);
    for _ in 0..days {
        let mut shaved: u32 = 0;
        for state in states.iter_mut().flatten() {
            if state.can_shave(horizon) {
                state.last_shaved = state.accumulator;
                shaved = shaved.checked_add(1).ok_or_else(|| overflow("shave count"))?;
            }
            state.advance()?;
        }

        if shaved == 0 {
            break;
        }
        skins = skins
            .checked_add(shaved)
            .ok_or_else(|| overflow("skin total"))?;
    }

    let projections = herd
        .iter()
        .zip(&states)
        .map(|(yak, state)| -> Result<YakProjection, HerdError> {
            let age_last_shaved = state
                .as_ref()
                .map(|state| age_at_last_shave(yak.age, state.last_shaved))
                .transpose()?;
            Ok(YakProjection {
                elapsed_age: elapsed_age(yak, days)?,
                age_last_shaved,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(days, skins, "wool accrued");

    Ok(WoolAccrual { skins, projections })
}

/// Convert a recorded shave accumulator into an age in years.
///
/// A non-zero record lands one age-day after the shave itself.
fn age_at_last_shave(age: Decimal, last_shaved: Decimal) -> Result<Decimal, HerdError> {
    let mut offset = YEARS_PER_DAY
        .checked_mul(last_shaved)
        .ok_or_else(|| overflow("last shave offset"))?;
    if !last_shaved.is_zero() {
        offset = offset
            .checked_add(YEARS_PER_DAY)
            .ok_or_else(|| overflow("last shave offset"))?;
    }
    age.checked_add(offset)
        .ok_or_else(|| overflow("last shave age"))
}
