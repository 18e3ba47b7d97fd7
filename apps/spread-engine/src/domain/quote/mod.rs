//! Quote Bounded Context
//!
//! Live market data attached to legs and chain options:
//! - Greeks as quoted by a vendor
//! - Immutable quote snapshots
//! - Shared handles through which snapshots are swapped

mod greeks;
mod handle;
mod option_quote;

pub use greeks::Greeks;
pub use handle::QuoteHandle;
pub use option_quote::OptionQuote;
