//! Leg Set Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::{Leg, PositionSide};

/// Ordered, immutable legs of one order or position.
///
/// Storage is shared, so clones are cheap and a [`Spread`](crate::Spread)
/// holds the same legs its caller built rather than a deep copy.
#[derive(Debug, Clone)]
pub struct LegSet {
    legs: Arc<[Leg]>,
    limit_price: Option<Decimal>,
}

impl LegSet {
    /// Create a leg set.
    #[must_use]
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs: legs.into(),
            limit_price: None,
        }
    }

    /// Attach the order's net limit price.
    #[must_use]
    pub const fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    /// Net limit price of the order, if any.
    #[must_use]
    pub const fn limit_price(&self) -> Option<Decimal> {
        self.limit_price
    }

    /// Legs in order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if there are no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Iterate legs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Leg> {
        self.legs.iter()
    }

    /// All legs are puts (false when empty).
    #[must_use]
    pub fn is_put_set(&self) -> bool {
        !self.is_empty() && self.legs.iter().all(Leg::is_put)
    }

    /// All legs are calls (false when empty).
    #[must_use]
    pub fn is_call_set(&self) -> bool {
        !self.is_empty() && self.legs.iter().all(Leg::is_call)
    }

    /// Distinct strikes, ascending.
    #[must_use]
    pub fn strikes(&self) -> BTreeSet<Decimal> {
        self.legs.iter().map(Leg::strike).collect()
    }

    /// Distinct expirations, ascending. Equity legs contribute nothing.
    #[must_use]
    pub fn expirations(&self) -> BTreeSet<NaiveDate> {
        self.legs.iter().filter_map(Leg::expiration).collect()
    }

    /// Number of legs on `side`.
    #[must_use]
    pub fn count_side(&self, side: PositionSide) -> usize {
        self.legs.iter().filter(|l| l.side() == side).count()
    }

    /// New set with the legs matching `predicate`, in order. The limit price
    /// belongs to the original order and is not carried over.
    #[must_use]
    pub fn select(&self, predicate: impl Fn(&Leg) -> bool) -> Self {
        Self::new(self.legs.iter().filter(|l| predicate(l)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a LegSet {
    type Item = &'a Leg;
    type IntoIter = std::slice::Iter<'a, Leg>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Leg>> for LegSet {
    fn from(legs: Vec<Leg>) -> Self {
        Self::new(legs)
    }
}
