//! Quote Source Port (Driven Port)
//!
//! Interface through which legs obtain the shared quote handle of a contract.

use crate::domain::quote::QuoteHandle;
use crate::domain::shared::Symbol;

/// Supplier of shared quote handles.
///
/// Every call for the same symbol returns a handle to the same slot, so a
/// quote pushed into the source is visible to every leg holding it.
pub trait QuoteSourcePort: Send + Sync {
    /// Shared handle for `symbol`, created empty on first request.
    fn subscribe(&self, symbol: &Symbol) -> QuoteHandle;
}
