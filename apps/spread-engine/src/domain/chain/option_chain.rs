//! Option chain filtering and extreme selection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ChainOption;

/// Field an extreme is selected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainField {
    /// Strike price.
    Strike,
    /// Signed delta, so puts order from deepest (most negative) up.
    Delta,
    /// Mid less intrinsic value.
    Extrinsic,
    /// Calendar days to expiration.
    DaysToExpiration,
}

impl fmt::Display for ChainField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strike => write!(f, "strike"),
            Self::Delta => write!(f, "delta"),
            Self::Extrinsic => write!(f, "extrinsic"),
            Self::DaysToExpiration => write!(f, "dte"),
        }
    }
}

/// Which end of the range to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

/// Options for one underlying, viewed at a date and underlying price.
///
/// Filters return new chains and never mutate the receiver. Options whose
/// quote lacks the data a filter or field needs are left out rather than
/// treated as zero.
#[derive(Debug, Clone)]
pub struct OptionChain {
    underlying: String,
    as_of: NaiveDate,
    underlying_price: Decimal,
    options: Vec<ChainOption>,
}

impl OptionChain {
    /// Create a chain.
    #[must_use]
    pub fn new(
        underlying: impl Into<String>,
        as_of: NaiveDate,
        underlying_price: Decimal,
        options: Vec<ChainOption>,
    ) -> Self {
        Self {
            underlying: underlying.into(),
            as_of,
            underlying_price,
            options,
        }
    }

    fn with_options(&self, options: Vec<ChainOption>) -> Self {
        Self {
            underlying: self.underlying.clone(),
            as_of: self.as_of,
            underlying_price: self.underlying_price,
            options,
        }
    }

    fn filter(&self, predicate: impl Fn(&ChainOption) -> bool) -> Self {
        self.with_options(self.options.iter().filter(|o| predicate(o)).cloned().collect())
    }

    /// Underlying root.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Date days-to-expiration is measured from.
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Underlying price extrinsic value is measured against.
    #[must_use]
    pub const fn underlying_price(&self) -> Decimal {
        self.underlying_price
    }

    /// Options in order.
    #[must_use]
    pub fn options(&self) -> &[ChainOption] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Puts only.
    #[must_use]
    pub fn puts(&self) -> Self {
        self.filter(ChainOption::is_put)
    }

    /// Calls only.
    #[must_use]
    pub fn calls(&self) -> Self {
        self.filter(ChainOption::is_call)
    }

    /// Options expiring within `min..=max` days.
    #[must_use]
    pub fn dte(&self, min: i64, max: i64) -> Self {
        let as_of = self.as_of;
        self.filter(|o| (min..=max).contains(&o.days_to_expiration(as_of)))
    }

    /// Options expiring in exactly `days` days.
    #[must_use]
    pub fn dte_exact(&self, days: i64) -> Self {
        self.dte(days, days)
    }

    /// Options whose absolute delta lies within `|min|..=|max|`.
    #[must_use]
    pub fn delta(&self, min: Decimal, max: Decimal) -> Self {
        let range = min.abs()..=max.abs();
        self.filter(|o| o.delta().is_some_and(|d| range.contains(&d.abs())))
    }

    /// Options struck at `price`.
    #[must_use]
    pub fn strikes_at(&self, price: Decimal) -> Self {
        self.filter(|o| o.strike() == price)
    }

    /// Options struck above `price`.
    #[must_use]
    pub fn strikes_above(&self, price: Decimal) -> Self {
        self.filter(|o| o.strike() > price)
    }

    /// Options struck below `price`.
    #[must_use]
    pub fn strikes_below(&self, price: Decimal) -> Self {
        self.filter(|o| o.strike() < price)
    }

    /// All options at the furthest expiration.
    #[must_use]
    pub fn max_dte(&self) -> Self {
        self.with_options(self.select_extreme(ChainField::DaysToExpiration, Boundary::Max))
    }

    /// All options at the nearest expiration.
    #[must_use]
    pub fn min_dte(&self) -> Self {
        self.with_options(self.select_extreme(ChainField::DaysToExpiration, Boundary::Min))
    }

    /// First option with the most time value; usually the one nearest the
    /// money.
    #[must_use]
    pub fn max_extrinsic(&self) -> Option<ChainOption> {
        self.first_extreme(ChainField::Extrinsic, Boundary::Max)
    }

    /// First option with the largest signed delta; among puts the one
    /// furthest out of the money.
    #[must_use]
    pub fn max_delta(&self) -> Option<ChainOption> {
        self.first_extreme(ChainField::Delta, Boundary::Max)
    }

    /// First option with the smallest signed delta; among puts the one
    /// deepest in the money.
    #[must_use]
    pub fn min_delta(&self) -> Option<ChainOption> {
        self.first_extreme(ChainField::Delta, Boundary::Min)
    }

    /// Value of `field` for one option, if its data is available.
    #[must_use]
    pub fn field_value(&self, option: &ChainOption, field: ChainField) -> Option<Decimal> {
        match field {
            ChainField::Strike => Some(option.strike()),
            ChainField::Delta => option.delta(),
            ChainField::Extrinsic => option.extrinsic(self.underlying_price),
            ChainField::DaysToExpiration => Some(Decimal::from(option.days_to_expiration(self.as_of))),
        }
    }

    /// Every option tied at the `boundary` value of `field`, in chain order.
    #[must_use]
    pub fn select_extreme(&self, field: ChainField, boundary: Boundary) -> Vec<ChainOption> {
        let valued: Vec<(Decimal, &ChainOption)> = self
            .options
            .iter()
            .filter_map(|o| match self.field_value(o, field) {
                Some(v) => Some((v, o)),
                None => {
                    tracing::trace!(symbol = %o.symbol(), %field, "option lacks field, skipped");
                    None
                }
            })
            .collect();

        let values = valued.iter().map(|(v, _)| *v);
        let extreme = match boundary {
            Boundary::Min => values.min(),
            Boundary::Max => values.max(),
        };

        extreme.map_or_else(Vec::new, |target| {
            valued
                .into_iter()
                .filter(|(v, _)| *v == target)
                .map(|(_, o)| o.clone())
                .collect()
        })
    }

    fn first_extreme(&self, field: ChainField, boundary: Boundary) -> Option<ChainOption> {
        self.select_extreme(field, boundary).into_iter().next()
    }
}
