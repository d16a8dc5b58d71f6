//! Core data structs: the herd member, ledger records, and the stock and
//! herd projections returned to callers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{OrderStatus, Sex};
use crate::ids::OrderId;

// ---------------------------------------------------------------------------
// Yak
// ---------------------------------------------------------------------------

/// One animal in the herd snapshot.
///
/// The record is immutable for the lifetime of the shop. Aging, death, and
/// shave history are re-derived from `age` for every query; nothing is ever
/// written back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Yak {
    /// Display name, unique within the herd.
    pub name: String,
    /// Initial age in years at day 0.
    #[ts(as = "String")]
    pub age: Decimal,
    /// Recorded sex.
    pub sex: Sex,
}

impl Yak {
    /// Create a new yak record.
    pub fn new(name: impl Into<String>, age: Decimal, sex: Sex) -> Self {
        Self {
            name: name.into(),
            age,
            sex,
        }
    }
}

// ---------------------------------------------------------------------------
// Quantities
// ---------------------------------------------------------------------------

/// A pair of milk and wool quantities (requested, granted, or produced).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stock {
    /// Liters of milk.
    #[ts(as = "String")]
    pub milk: Decimal,
    /// Skins of wool.
    pub skins: u32,
}

impl Stock {
    /// Create a stock pair.
    pub const fn new(milk: Decimal, skins: u32) -> Self {
        Self { milk, skins }
    }

    /// Stock with nothing in it.
    pub const fn empty() -> Self {
        Self {
            milk: Decimal::ZERO,
            skins: 0,
        }
    }
}

/// Produced stock net of what the ledger has already committed.
///
/// Both sides are signed: orders booked against an earlier day are not
/// checked against later days, so the net can dip below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AvailableStock {
    /// Liters of milk still unpromised.
    #[ts(as = "String")]
    pub milk: Decimal,
    /// Skins of wool still unpromised.
    #[ts(as = "i32")]
    pub skins: i64,
}

// ---------------------------------------------------------------------------
// OrderRecord
// ---------------------------------------------------------------------------

/// A committed order in the ledger.
///
/// Records are immutable once appended. A partial grant stores zero for the
/// side that could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OrderRecord {
    /// Unique record identifier.
    pub id: OrderId,
    /// The simulated day the order was placed against.
    pub day: u32,
    /// Liters of milk committed.
    #[ts(as = "String")]
    pub milk: Decimal,
    /// Skins of wool committed.
    pub skins: u32,
    /// Customer name from the order request, if given.
    pub customer: Option<String>,
    /// Real-world timestamp.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Fulfillment
// ---------------------------------------------------------------------------

/// Result of a fulfillment decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FulfillmentOutcome {
    /// Quantities granted to the customer (zero on the unmet side).
    pub granted: Stock,
    /// The decision tag.
    pub status: OrderStatus,
}

// ---------------------------------------------------------------------------
// Herd projection
// ---------------------------------------------------------------------------

/// Display projection of one yak after a number of simulated days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HerdMemberView {
    /// The yak's name.
    pub name: String,
    /// Elapsed age in years.
    #[ts(as = "String")]
    pub age: Decimal,
    /// Age in years at the most recent shave. `None` for yaks that were
    /// already past the death threshold at day 0.
    #[serde(rename = "age-last-shaved")]
    #[ts(as = "Option<String>")]
    pub age_last_shaved: Option<Decimal>,
}
