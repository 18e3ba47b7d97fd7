//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod option_right;
mod symbol;

pub use option_right::OptionRight;
pub use symbol::{OsiComponents, Symbol};
