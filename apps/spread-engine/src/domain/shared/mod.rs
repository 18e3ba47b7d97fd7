//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::SymbolError;
pub use value_objects::{OptionRight, OsiComponents, Symbol};
