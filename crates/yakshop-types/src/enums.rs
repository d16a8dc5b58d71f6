//! Enumeration types for the Yak Shop.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

/// Sex of a yak as recorded in the herd file.
///
/// Only females produce milk. Every other recorded value collapses into
/// [`Sex::Other`]; wool production does not depend on sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Sex {
    /// A female yak (`f` in the herd file).
    #[serde(rename = "f")]
    #[serde(alias = "female")]
    Female,
    /// Any other recorded sex.
    #[serde(rename = "m")]
    Other,
}

impl Sex {
    /// Interpret a herd-file sex code.
    ///
    /// `f` and `female` (case-insensitive, surrounding whitespace ignored)
    /// map to [`Sex::Female`]; anything else maps to [`Sex::Other`].
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("f") || code.eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Other
        }
    }

    /// Whether this yak is eligible for milk production.
    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Outcome tag of a fulfillment decision.
///
/// Rejection is a normal business outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Both requested quantities were granted in full.
    Fulfilled,
    /// Exactly one of the requested quantities was granted.
    Partial,
    /// Neither quantity could be granted; nothing was recorded.
    Rejected,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fulfilled => write!(f, "fulfilled"),
            Self::Partial => write!(f, "partial"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
