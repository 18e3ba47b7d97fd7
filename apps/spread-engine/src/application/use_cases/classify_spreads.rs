//! Classify Spreads Use Case

use std::sync::Arc;

use crate::application::ports::QuoteSourcePort;
use crate::application::services::{ClassifiedBatch, classify_all};
use crate::domain::spread::{Classifier, LegSet};

/// Use case for turning raw leg sets into live-priced spreads.
///
/// Each leg is rebound to the quote source's shared handle for its symbol
/// before classification, so later quote updates reach the spreads.
pub struct ClassifySpreadsUseCase<Q>
where
    Q: QuoteSourcePort,
{
    quotes: Arc<Q>,
    classifier: Classifier,
}

impl<Q> ClassifySpreadsUseCase<Q>
where
    Q: QuoteSourcePort,
{
    /// Create a new ClassifySpreadsUseCase.
    pub const fn new(quotes: Arc<Q>, classifier: Classifier) -> Self {
        Self { quotes, classifier }
    }

    /// Bind one leg set to shared quote handles.
    ///
    /// A quote already attached to a leg seeds the shared handle when the
    /// source has nothing for that symbol yet.
    pub fn bind(&self, legs: &LegSet) -> LegSet {
        let bound = LegSet::new(
            legs.iter()
                .map(|leg| {
                    let shared = self.quotes.subscribe(leg.symbol());
                    if let Some(existing) = leg.quote() {
                        shared.seed(existing);
                    }
                    leg.clone().with_quote_handle(shared)
                })
                .collect(),
        );
        match legs.limit_price() {
            Some(price) => bound.with_limit_price(price),
            None => bound,
        }
    }

    /// Execute the use case.
    pub fn execute(&self, legsets: impl IntoIterator<Item = LegSet>) -> ClassifiedBatch {
        let bound: Vec<LegSet> = legsets.into_iter().map(|legs| self.bind(&legs)).collect();
        classify_all(&self.classifier, bound)
    }
}
