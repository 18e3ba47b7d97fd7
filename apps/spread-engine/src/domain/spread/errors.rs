//! Spread Errors

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use super::value_objects::{CountRule, Leg, SpreadVariant};
use crate::domain::shared::Symbol;

/// Structural rule a leg set failed while being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Wrong number of legs for the attempted variant.
    LegCount {
        /// Legs the variant requires.
        expected: usize,
        /// Legs supplied.
        actual: usize,
    },
    /// Legs are not all puts or all calls (or include equity).
    MixedOptionKind,
    /// Long/short mix does not match the side policy.
    SideImbalance {
        /// Long legs.
        longs: usize,
        /// Short legs.
        shorts: usize,
    },
    /// Wrong number of distinct expirations.
    ExpirationCount {
        /// Required count.
        expected: CountRule,
        /// Distinct expirations found.
        actual: usize,
    },
    /// Wrong number of distinct strikes.
    StrikeCount {
        /// Required count.
        expected: CountRule,
        /// Distinct strikes found.
        actual: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LegCount { expected, actual } => {
                write!(f, "expected {expected} legs, found {actual}")
            }
            Self::MixedOptionKind => write!(f, "legs mix puts, calls or equity; should be a straddle"),
            Self::SideImbalance { longs, shorts } => {
                write!(f, "unbalanced sides ({longs} long, {shorts} short)")
            }
            Self::ExpirationCount { expected, actual } => {
                write!(f, "expected {expected} distinct expirations, found {actual}")
            }
            Self::StrikeCount { expected, actual } => {
                write!(f, "expected {expected} distinct strikes, found {actual}")
            }
        }
    }
}

/// A leg set does not have the shape of the attempted variant.
#[derive(Debug, Clone, Error)]
#[error("not a {attempted}: {violation} [{}]", leg_symbols(.offending_legs))]
pub struct StructuralError {
    /// Variant the classifier tried to build.
    pub attempted: SpreadVariant,
    /// First rule that failed.
    pub violation: Violation,
    /// The legs as supplied, for diagnostics.
    pub offending_legs: Vec<Leg>,
}

fn leg_symbols(legs: &[Leg]) -> String {
    legs.iter()
        .map(|l| l.symbol().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote field needed by a pricing computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    /// No quote snapshot at all.
    Quote,
    /// Bid price.
    Bid,
    /// Ask price.
    Ask,
    /// Delta.
    Delta,
    /// Gamma.
    Gamma,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quote => write!(f, "quote"),
            Self::Bid => write!(f, "bid"),
            Self::Ask => write!(f, "ask"),
            Self::Delta => write!(f, "delta"),
            Self::Gamma => write!(f, "gamma"),
        }
    }
}

/// Errors from spread pricing computations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// A leg's quote lacks a field the computation needs.
    #[error("Missing {field} for {symbol}")]
    MissingQuoteField {
        /// Leg symbol.
        symbol: Symbol,
        /// Absent field.
        field: QuoteField,
    },

    /// The order carries no limit price.
    #[error("Missing limit price")]
    MissingLimitPrice,

    /// Unit price requested before anything filled.
    #[error("Cannot compute unit price with zero filled quantity")]
    NoFilledQuantity,

    /// Intermediate value exceeded decimal range.
    #[error("Projection overflowed after {steps} steps")]
    Overflow {
        /// Whole-dollar steps completed before overflow.
        steps: u64,
    },

    /// Displacement needs more whole-dollar steps than allowed.
    #[error("Projection needs {integral} steps, limit is {max_steps}")]
    StepLimit {
        /// Whole dollars requested.
        integral: Decimal,
        /// Configured step cap.
        max_steps: u64,
    },
}
