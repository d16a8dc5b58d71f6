//! The herd snapshot and the per-yak aging model.
//!
//! Ages are tracked internally in age-days: 100 age-days per year of
//! recorded age. A yak is alive for production purposes while its age-days
//! stay below [`MAX_AGE_DAYS`]. Death is a computed predicate; no yak is
//! ever removed from the [`Herd`].
//!
//! Every query replays aging from the immutable initial age. There is no
//! forward clock: asking about day 13 twice runs the same simulation twice.

use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;
use yakshop_types::Yak;

use crate::error::{HerdError, overflow};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Age-days at which a yak dies (10 years).
pub const MAX_AGE_DAYS: u32 = 1000;

/// Age-days per year of recorded age.
pub const AGE_DAYS_PER_YEAR: u32 = 100;

/// Years added to the elapsed age per simulated day.
pub const YEARS_PER_DAY: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

// ---------------------------------------------------------------------------
// Herd
// ---------------------------------------------------------------------------

/// A validated, read-only herd snapshot.
///
/// Names are unique and ages non-negative. The order of yaks is the order
/// they were supplied in, and every projection returned by the accruals
/// follows that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Herd {
    yaks: Vec<Yak>,
}

impl Herd {
    /// Build a herd from a list of yak records.
    ///
    /// # Errors
    ///
    /// Returns [`HerdError::DuplicateName`] if two yaks share a name, or
    /// [`HerdError::NegativeAge`] if any age is below zero.
    pub fn new(yaks: Vec<Yak>) -> Result<Self, HerdError> {
        let mut seen = BTreeSet::new();
        for yak in &yaks {
            if yak.age < Decimal::ZERO {
                return Err(HerdError::NegativeAge {
                    name: yak.name.clone(),
                    age: yak.age,
                });
            }
            if !seen.insert(yak.name.as_str()) {
                return Err(HerdError::DuplicateName(yak.name.clone()));
            }
        }
        Ok(Self { yaks })
    }

    /// All yaks, in snapshot order.
    pub fn yaks(&self) -> &[Yak] {
        &self.yaks
    }

    /// Number of yaks in the snapshot (alive or not).
    pub const fn len(&self) -> usize {
        self.yaks.len()
    }

    /// Whether the snapshot is empty.
    pub const fn is_empty(&self) -> bool {
        self.yaks.is_empty()
    }

    /// Iterate over the yaks in snapshot order.
    pub fn iter(&self) -> core::slice::Iter<'_, Yak> {
        self.yaks.iter()
    }
}

impl<'a> IntoIterator for &'a Herd {
    type Item = &'a Yak;
    type IntoIter = core::slice::Iter<'a, Yak>;

    fn into_iter(self) -> Self::IntoIter {
        self.yaks.iter()
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Derived display state of one yak after a number of simulated days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YakProjection {
    /// Recorded age plus 0.01 years per simulated day.
    pub elapsed_age: Decimal,
    /// Age in years at the most recent shave, `None` when the yak was
    /// already dead at day 0.
    pub age_last_shaved: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Aging helpers
// ---------------------------------------------------------------------------

/// Validate a requested day offset and convert it to a simulation length.
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] if `day` is negative or does not fit
/// in a `u32`.
pub fn simulation_days(day: i64) -> Result<u32, HerdError> {
    u32::try_from(day).map_err(|e| {
        debug!(error = %e, day, "day out of simulation range");
        HerdError::InvalidDay { day }
    })
}

/// A yak's recorded age converted to age-days, rounded to the nearest day.
///
/// # Errors
///
/// Returns [`HerdError::ArithmeticOverflow`] if the age does not fit.
pub fn age_days(yak: &Yak) -> Result<u32, HerdError> {
    yak.age
        .checked_mul(Decimal::from(AGE_DAYS_PER_YEAR))
        .map(|days| days.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|days| days.to_u32())
        .ok_or_else(|| overflow("age-days conversion"))
}

/// Whether a yak with the given age-days still produces.
pub const fn is_alive(age_days: u32) -> bool {
    age_days < MAX_AGE_DAYS
}

/// Recorded age plus 0.01 years per simulated day.
///
/// # Errors
///
/// Returns [`HerdError::ArithmeticOverflow`] on decimal overflow.
pub fn elapsed_age(yak: &Yak, days: u32) -> Result<Decimal, HerdError> {
    YEARS_PER_DAY
        .checked_mul(Decimal::from(days))
        .and_then(|years| yak.age.checked_add(years))
        .ok_or_else(|| overflow("elapsed age"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use yakshop_types::Sex;

    use super::*;

    fn yak(name: &str, age: Decimal) -> Yak {
        Yak::new(name, age, Sex::Female)
    }

    #[test]
    fn herd_rejects_duplicate_names() {
        let result = Herd::new(vec![yak("Betty-1", dec!(4)), yak("Betty-1", dec!(5))]);
        assert!(matches!(result, Err(HerdError::DuplicateName(name)) if name == "Betty-1"));
    }

    #[test]
    fn herd_rejects_negative_age() {
        let result = Herd::new(vec![yak("Betty-1", dec!(-0.5))]);
        assert!(matches!(result, Err(HerdError::NegativeAge { .. })));
    }

    #[test]
    fn herd_accepts_zero_age() {
        let herd = Herd::new(vec![yak("Calf", dec!(0))]);
        assert!(herd.is_ok());
        assert_eq!(herd.map(|h| h.len()).unwrap_or(0), 1);
    }

    #[test]
    fn age_days_scales_and_rounds() {
        assert_eq!(age_days(&yak("a", dec!(4))).ok(), Some(400));
        assert_eq!(age_days(&yak("b", dec!(9.5))).ok(), Some(950));
        assert_eq!(age_days(&yak("c", dec!(0.29))).ok(), Some(29));
        assert_eq!(age_days(&yak("d", dec!(1.005))).ok(), Some(101));
        assert_eq!(age_days(&yak("e", dec!(1.004))).ok(), Some(100));
    }

    #[test]
    fn death_threshold_is_exclusive() {
        assert!(is_alive(999));
        assert!(!is_alive(MAX_AGE_DAYS));
        assert!(!is_alive(1050));
    }

    #[test]
    fn negative_day_is_invalid() {
        assert!(matches!(simulation_days(-1), Err(HerdError::InvalidDay { day: -1 })));
        assert_eq!(simulation_days(0).ok(), Some(0));
        assert_eq!(simulation_days(13).ok(), Some(13));
        let too_far = i64::from(u32::MAX) + 1;
        assert!(matches!(
            simulation_days(too_far),
            Err(HerdError::InvalidDay { day }) if day == too_far
        ));
    }

    #[test]
    fn elapsed_age_adds_a_hundredth_per_day() {
        let betty = yak("Betty-1", dec!(4));
        assert_eq!(elapsed_age(&betty, 0).ok(), Some(dec!(4)));
        assert_eq!(elapsed_age(&betty, 13).ok(), Some(dec!(4.13)));
        assert_eq!(elapsed_age(&betty, 100).ok(), Some(dec!(5)));
    }
}
