//! Spread Collection Service
//!
//! Batch classification of orders or positions and filtering of the
//! resulting spreads.

use crate::domain::shared::OptionRight;
use crate::domain::spread::{Classifier, LegSet, Spread, SpreadSummary, SpreadVariant, StructuralError};

/// Classified spreads.
///
/// Filters return new collections and preserve order.
#[derive(Debug, Clone, Default)]
pub struct SpreadCollection {
    spreads: Vec<Spread>,
}

impl SpreadCollection {
    /// Create a collection.
    #[must_use]
    pub const fn new(spreads: Vec<Spread>) -> Self {
        Self { spreads }
    }

    fn filter(&self, predicate: impl Fn(&Spread) -> bool) -> Self {
        self.spreads.iter().filter(|s| predicate(s)).cloned().collect()
    }

    /// Spreads in order.
    #[must_use]
    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    /// Number of spreads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    /// Iterate spreads in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Spread> {
        self.spreads.iter()
    }

    /// Spreads of one variant.
    #[must_use]
    pub fn variant(&self, variant: SpreadVariant) -> Self {
        self.filter(|s| s.variant() == variant)
    }

    /// Verticals only.
    #[must_use]
    pub fn verticals(&self) -> Self {
        self.variant(SpreadVariant::Vertical)
    }

    /// Everything except singles.
    #[must_use]
    pub fn spreads_only(&self) -> Self {
        self.filter(Spread::is_spread)
    }

    /// Spreads whose body is short.
    #[must_use]
    pub fn shorts(&self) -> Self {
        self.filter(Spread::is_short)
    }

    /// Spreads whose body is long.
    #[must_use]
    pub fn longs(&self) -> Self {
        self.filter(Spread::is_long)
    }

    /// Put spreads.
    #[must_use]
    pub fn puts(&self) -> Self {
        self.filter(|s| s.right() == OptionRight::Put)
    }

    /// Call spreads.
    #[must_use]
    pub fn calls(&self) -> Self {
        self.filter(|s| s.right() == OptionRight::Call)
    }

    /// Spreads that open a position.
    #[must_use]
    pub fn opening(&self) -> Self {
        self.filter(Spread::is_opening)
    }

    /// Spreads that close a position.
    #[must_use]
    pub fn closing(&self) -> Self {
        self.filter(Spread::is_closing)
    }

    /// Spreads with exactly `count` legs.
    #[must_use]
    pub fn leg_count(&self, count: usize) -> Self {
        self.filter(|s| s.legs().len() == count)
    }

    /// Reporting view of every spread.
    #[must_use]
    pub fn summaries(&self) -> Vec<SpreadSummary> {
        self.spreads.iter().map(Spread::summary).collect()
    }
}

impl FromIterator<Spread> for SpreadCollection {
    fn from_iter<I: IntoIterator<Item = Spread>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SpreadCollection {
    type Item = Spread;
    type IntoIter = std::vec::IntoIter<Spread>;

    fn into_iter(self) -> Self::IntoIter {
        self.spreads.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpreadCollection {
    type Item = &'a Spread;
    type IntoIter = std::slice::Iter<'a, Spread>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of classifying a batch of leg sets.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedBatch {
    /// Leg sets that classified.
    pub spreads: SpreadCollection,
    /// Leg sets that did not, with the reason.
    pub rejected: Vec<(LegSet, StructuralError)>,
}

/// Classify every leg set, keeping rejects alongside their error.
pub fn classify_all(classifier: &Classifier, legsets: impl IntoIterator<Item = LegSet>) -> ClassifiedBatch {
    let mut spreads = Vec::new();
    let mut rejected = Vec::new();

    for legs in legsets {
        match classifier.classify(&legs) {
            Ok(spread) => spreads.push(spread),
            Err(e) => {
                tracing::warn!(error = %e, legs = legs.len(), "Skipping unclassifiable combo");
                rejected.push((legs, e));
            }
        }
    }

    tracing::debug!(classified = spreads.len(), rejected = rejected.len(), "batch classified");
    ClassifiedBatch {
        spreads: SpreadCollection::new(spreads),
        rejected,
    }
}
