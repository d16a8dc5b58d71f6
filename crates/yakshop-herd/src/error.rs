//! Error types for the `yakshop-herd` crate.
//!
//! Every failure here is a local precondition violation. The computations
//! are pure and deterministic, so none of these are worth retrying.

use rust_decimal::Decimal;

/// Errors that can occur while building a herd or running an accrual.
#[derive(Debug, thiserror::Error)]
pub enum HerdError {
    /// The requested day offset is negative or too large to simulate.
    #[error("invalid day offset: {day}")]
    InvalidDay {
        /// The rejected day offset.
        day: i64,
    },

    /// Two yaks in the snapshot share a name.
    #[error("duplicate yak name: {0}")]
    DuplicateName(String),

    /// A yak was recorded with a negative age.
    #[error("yak {name} has negative age {age}")]
    NegativeAge {
        /// The yak's name.
        name: String,
        /// The rejected age.
        age: Decimal,
    },

    /// An arithmetic overflow occurred during a yield computation.
    #[error("arithmetic overflow in yield computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

/// Build an [`HerdError::ArithmeticOverflow`] for the given context.
pub(crate) fn overflow(context: &str) -> HerdError {
    HerdError::ArithmeticOverflow {
        context: String::from(context),
    }
}
