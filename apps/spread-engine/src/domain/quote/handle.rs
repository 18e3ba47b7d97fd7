//! Shared, swappable quote snapshot.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use super::OptionQuote;

/// Shared slot holding the latest quote for one contract.
///
/// Every leg referencing the same contract holds a clone of the same handle.
/// Replacing the snapshot makes the new quote visible through all of them
/// without rebuilding legs or spreads. Readers receive an `Arc` to an
/// immutable snapshot, so one computation never mixes two updates.
#[derive(Clone, Default)]
pub struct QuoteHandle {
    slot: Arc<RwLock<Option<Arc<OptionQuote>>>>,
}

impl QuoteHandle {
    /// Create an empty handle (no quote received yet).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a handle pre-populated with a quote.
    #[must_use]
    pub fn with_quote(quote: OptionQuote) -> Self {
        let handle = Self::default();
        handle.replace(quote);
        handle
    }

    /// Current snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<OptionQuote>> {
        self.slot.read().clone()
    }

    /// Swap in a new snapshot.
    pub fn replace(&self, quote: OptionQuote) {
        *self.slot.write() = Some(Arc::new(quote));
    }

    /// Install `snapshot` only if the handle holds nothing yet.
    ///
    /// Returns whether the snapshot was installed.
    pub fn seed(&self, snapshot: Arc<OptionQuote>) -> bool {
        let mut slot = self.slot.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some(snapshot);
        true
    }

    /// Drop the current snapshot.
    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    /// Whether two handles share the same slot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for QuoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QuoteHandle").field(&self.snapshot()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_handle_has_no_snapshot() {
        assert!(QuoteHandle::empty().snapshot().is_none());
    }

    #[test]
    fn replace_is_visible_through_clones() {
        let handle = QuoteHandle::empty();
        let shared = handle.clone();

        handle.replace(OptionQuote::new("SPY").with_bid_ask(dec!(1.00), dec!(1.10)));
        assert_eq!(shared.snapshot().unwrap().bid, Some(dec!(1.00)));
        assert!(handle.ptr_eq(&shared));
    }

    #[test]
    fn held_snapshot_is_not_torn_by_replace() {
        let handle = QuoteHandle::with_quote(OptionQuote::new("SPY").with_bid_ask(dec!(1), dec!(2)));
        let before = handle.snapshot().unwrap();

        handle.replace(OptionQuote::new("SPY").with_bid_ask(dec!(5), dec!(6)));

        assert_eq!(before.bid, Some(dec!(1)));
        assert_eq!(handle.snapshot().unwrap().bid, Some(dec!(5)));
    }

    #[test]
    fn seed_fills_only_empty_handles() {
        let handle = QuoteHandle::empty();
        assert!(handle.seed(Arc::new(OptionQuote::new("SPY").with_bid_ask(dec!(1), dec!(2)))));
        assert!(!handle.seed(Arc::new(OptionQuote::new("SPY").with_bid_ask(dec!(7), dec!(8)))));
        assert_eq!(handle.snapshot().unwrap().bid, Some(dec!(1)));
    }

    #[test]
    fn clear_removes_snapshot() {
        let handle = QuoteHandle::with_quote(OptionQuote::new("SPY"));
        handle.clear();
        assert!(handle.snapshot().is_none());
    }

    #[test]
    fn distinct_handles_are_not_ptr_eq() {
        assert!(!QuoteHandle::empty().ptr_eq(&QuoteHandle::empty()));
    }
}
