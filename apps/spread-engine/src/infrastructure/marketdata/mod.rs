//! Market Data Adapters
//!
//! In-memory implementation of `QuoteSourcePort` that fans quote updates out
//! to every leg sharing a symbol.

mod quote_registry;

pub use quote_registry::QuoteRegistry;
