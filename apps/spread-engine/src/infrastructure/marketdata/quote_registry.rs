//! In-memory quote registry.
//!
//! Holds the [`QuoteHandle`]s registered for each OSI symbol. Incoming quotes
//! are swapped into every handle for their symbol, so each leg and chain
//! option holding one of them sees the update.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::application::ports::QuoteSourcePort;
use crate::domain::quote::{OptionQuote, QuoteHandle};
use crate::domain::shared::Symbol;

/// Registry of shared quote handles keyed by symbol.
///
/// The first handle of a symbol is the one [`subscribe`](Self::subscribe)
/// hands out; handles added with [`register`](Self::register) are updated
/// alongside it.
#[derive(Debug, Default)]
pub struct QuoteRegistry {
    handles: RwLock<HashMap<Symbol, Vec<QuoteHandle>>>,
}

impl QuoteRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle for `symbol`, created empty if this is the first request.
    pub fn subscribe(&self, symbol: impl Into<Symbol>) -> QuoteHandle {
        let symbol = symbol.into();
        if let Some(handle) = self.find(&symbol) {
            return handle;
        }
        let mut handles = self.handles.write();
        let registered = handles.entry(symbol).or_default();
        if registered.is_empty() {
            registered.push(QuoteHandle::empty());
        }
        registered[0].clone()
    }

    /// Add an existing handle to the symbol's update list.
    ///
    /// Returns `false` if that handle was already registered.
    pub fn register(&self, symbol: impl Into<Symbol>, handle: QuoteHandle) -> bool {
        let mut handles = self.handles.write();
        let registered = handles.entry(symbol.into()).or_default();
        if registered.iter().any(|h| h.ptr_eq(&handle)) {
            return false;
        }
        registered.push(handle);
        true
    }

    /// Shared handle for `symbol`, if anything is registered.
    #[must_use]
    pub fn find(&self, symbol: &Symbol) -> Option<QuoteHandle> {
        self.handles.read().get(symbol).and_then(|h| h.first()).cloned()
    }

    /// Swap `quote` into every handle registered for its symbol.
    ///
    /// Returns `false` when nothing is registered for the symbol; the quote
    /// is dropped.
    pub fn apply(&self, quote: OptionQuote) -> bool {
        let handles = self.handles.read();
        match handles.get(&quote.symbol).filter(|h| !h.is_empty()) {
            Some(registered) => {
                for handle in registered {
                    handle.replace(quote.clone());
                }
                true
            }
            None => {
                tracing::trace!(symbol = %quote.symbol, "no subscriber for quote");
                false
            }
        }
    }

    /// Apply each quote; returns how many matched a subscription.
    pub fn apply_all(&self, quotes: impl IntoIterator<Item = OptionQuote>) -> usize {
        let applied = quotes.into_iter().map(|q| self.apply(q)).filter(|hit| *hit).count();
        tracing::debug!(applied, "quotes applied");
        applied
    }

    /// Subscribed symbols, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.handles.read().keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Number of subscribed symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    /// Check if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }
}

impl QuoteSourcePort for QuoteRegistry {
    fn subscribe(&self, symbol: &Symbol) -> QuoteHandle {
        Self::subscribe(self, symbol.clone())
    }
}
