//! Milk accrual: a continuous daily yield from living females.
//!
//! Each living female gives `50 - 0.03 * age_days` liters per day. The
//! formula is never clamped; a yak stops producing only when it crosses the
//! death threshold, so its final day still yields a positive amount computed
//! at its pre-death age.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{HerdError, overflow};
use crate::yak::{Herd, age_days, is_alive, simulation_days};

/// Liters a newborn female gives per day.
pub const MILK_BASE_LITERS: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Liters lost per age-day.
pub const MILK_DECLINE_PER_AGE_DAY: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Cumulative milk over a day range.
///
/// Per-yak ages after the range live on [`crate::WoolAccrual`], whose
/// projection also carries the last-shave age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilkAccrual {
    /// Total liters produced over the range.
    pub liters: Decimal,
}

/// Daily milk of a female at the given age-days.
pub fn daily_milk(age_days: u32) -> Decimal {
    MILK_BASE_LITERS.saturating_sub(MILK_DECLINE_PER_AGE_DAY.saturating_mul(Decimal::from(age_days)))
}

/// Compute the cumulative milk produced by the herd over `day` days.
///
/// Day `0` is the first simulated day; `day = 13` sums days `0..13`.
///
/// # Errors
///
/// Returns [`HerdError::InvalidDay`] for a negative `day`, or
/// [`HerdError::ArithmeticOverflow`] on decimal overflow.
pub fn milk_yield(herd: &Herd, day: i64) -> Result<MilkAccrual, HerdError> {
    let days = simulation_days(day)?;

    let mut milking: Vec<u32> = Vec::new();
    for yak in herd.iter().filter(|yak| yak.sex.is_female()) {
        let age = age_days(yak)?;
        if is_alive(age) {
            milking.push(age);
        }
    }

    let mut liters = Decimal::ZERO;
    for _ in 0..days {
        if milking.is_empty() {
            break;
        }

        for &age in &milking {
            liters = liters
                .checked_add(daily_milk(age))
                .ok_or_else(|| overflow("milk total"))?;
        }

        for age in &mut milking {
            *age = age.checked_add(1).ok_or_else(|| overflow("milk aging"))?;
        }
        milking.retain(|&age| is_alive(age));
    }

    debug!(days, %liters, milking = milking.len(), "milk accrued");

    Ok(MilkAccrual { liters })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use yakshop_types::{Sex, Yak};

    use super::*;

    fn herd(yaks: &[(&str, Decimal, Sex)]) -> Herd {
        Herd::new(
            yaks.iter()
                .map(|(name, age, sex)| Yak::new(*name, *age, *sex))
                .collect(),
        )
        .unwrap_or_default()
    }

    fn bettys() -> Herd {
        herd(&[
            ("Betty-1", dec!(4), Sex::Female),
            ("Betty-2", dec!(8), Sex::Female),
            ("Betty-3", dec!(9.5), Sex::Female),
        ])
    }

    fn liters(herd: &Herd, day: i64) -> Decimal {
        milk_yield(herd, day).map(|m| m.liters).unwrap_or(Decimal::MIN)
    }

    #[test]
    fn daily_milk_formula() {
        assert_eq!(daily_milk(0), dec!(50));
        assert_eq!(daily_milk(400), dec!(38));
        assert_eq!(daily_milk(999), dec!(20.03));
    }

    #[test]
    fn zero_days_yield_nothing() {
        assert_eq!(liters(&bettys(), 0), Decimal::ZERO);
    }

    #[test]
    fn newborn_female_gives_fifty_liters_on_day_one() {
        let calf = herd(&[("Calf", dec!(0), Sex::Female)]);
        assert_eq!(liters(&calf, 1), dec!(50));
    }

    #[test]
    fn reference_herd_totals() {
        let herd = bettys();
        assert_eq!(liters(&herd, 1), dec!(85.5));
        assert_eq!(liters(&herd, 13), dec!(1104.48));
        assert_eq!(liters(&herd, 14), dec!(1188.81));
    }

    #[test]
    fn males_give_no_milk() {
        let herd = herd(&[("Bob", dec!(4), Sex::Other)]);
        assert_eq!(liters(&herd, 50), Decimal::ZERO);
    }

    #[test]
    fn dead_yak_gives_no_milk() {
        let herd = herd(&[("Old", dec!(10), Sex::Female), ("Older", dec!(12), Sex::Female)]);
        assert_eq!(liters(&herd, 100), Decimal::ZERO);
    }

    #[test]
    fn dying_yak_still_milks_on_its_last_day() {
        // 998 and 999 age-days, then dead.
        let herd = herd(&[("Old", dec!(9.98), Sex::Female)]);
        assert_eq!(liters(&herd, 2), dec!(40.09));
        assert_eq!(liters(&herd, 5), dec!(40.09));
    }

    #[test]
    fn dead_and_dying_females_stop_contributing() {
        let herd = herd(&[
            ("Betty-1", dec!(4), Sex::Female),
            ("Old", dec!(9.98), Sex::Female),
            ("Dead", dec!(11), Sex::Female),
        ]);
        // Betty-1 gives 38 + 37.97; Old gives 20.06 + 20.03 and then dies.
        assert_eq!(liters(&herd, 2), dec!(116.06));
        // Day three is Betty-1 alone: 37.94.
        assert_eq!(liters(&herd, 3), dec!(154));
    }

    #[test]
    fn negative_day_is_rejected() {
        assert!(matches!(
            milk_yield(&bettys(), -3),
            Err(HerdError::InvalidDay { day: -3 })
        ));
    }

    #[test]
    fn repeated_queries_agree() {
        let herd = bettys();
        assert_eq!(liters(&herd, 13), liters(&herd, 13));
        assert_eq!(liters(&herd, 13), dec!(1104.48));
    }

    proptest! {
        #[test]
        fn milk_never_decreases_with_more_females(
            ages in proptest::collection::vec(0u32..1200, 0..8),
            extra in 0u32..1200,
            day in 0i64..300,
        ) {
            let yaks: Vec<Yak> = ages
                .iter()
                .enumerate()
                .map(|(i, age)| Yak::new(format!("yak-{i}"), Decimal::new(i64::from(*age), 2), Sex::Female))
                .collect();
            let mut larger = yaks.clone();
            larger.push(Yak::new("extra", Decimal::new(i64::from(extra), 2), Sex::Female));

            let small = Herd::new(yaks).unwrap_or_default();
            let large = Herd::new(larger).unwrap_or_default();

            prop_assert!(liters(&large, day) >= liters(&small, day));
        }

        #[test]
        fn milk_never_decreases_with_more_days(
            ages in proptest::collection::vec(0u32..1200, 1..6),
            day in 0i64..300,
        ) {
            let herd = Herd::new(
                ages.iter()
                    .enumerate()
                    .map(|(i, age)| Yak::new(format!("yak-{i}"), Decimal::new(i64::from(*age), 2), Sex::Female))
                    .collect(),
            )
            .unwrap_or_default();

            prop_assert!(liters(&herd, day + 1) >= liters(&herd, day));
        }
    }
}
