//! Herd aging, death, and yield accrual for the Yak Shop.
//!
//! This crate is the pure simulation layer: it takes a read-only [`Herd`]
//! and a day offset and replays the herd from day 0 to compute what it has
//! produced. It performs no I/O and holds no state between calls.
//!
//! # Modules
//!
//! - [`yak`] -- The [`Herd`] snapshot, age-days conversion, and the death
//!   threshold.
//! - [`milk`] -- Continuous daily milk accrual from living females.
//! - [`wool`] -- Discrete-event shave simulation for wool skins.
//! - [`error`] -- Error types ([`HerdError`]).
//!
//! # Usage
//!
//! ```
//! use rust_decimal::Decimal;
//! use yakshop_herd::{Herd, milk_yield, wool_yield};
//! use yakshop_types::{Sex, Yak};
//!
//! let herd = Herd::new(vec![Yak::new("Betty-1", Decimal::new(4, 0), Sex::Female)]).ok();
//! let herd = herd.unwrap_or_default();
//!
//! let milk = milk_yield(&herd, 1).map(|m| m.liters).ok();
//! assert_eq!(milk, Some(Decimal::new(38, 0)));
//!
//! let wool = wool_yield(&herd, 13).map(|w| w.skins).ok();
//! assert_eq!(wool, Some(1));
//! ```

pub mod error;
pub mod milk;
pub mod wool;
pub mod yak;

// Re-export primary types at crate root.
pub use error::HerdError;
pub use milk::{MilkAccrual, daily_milk, milk_yield};
pub use wool::{WoolAccrual, wool_yield};
pub use yak::{Herd, MAX_AGE_DAYS, YakProjection, age_days, is_alive, simulation_days};
