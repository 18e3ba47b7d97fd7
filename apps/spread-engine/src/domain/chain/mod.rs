//! Chain Bounded Context
//!
//! Option chains narrowed by kind, expiration, delta and strike, and
//! selection of the option at an extreme of a chosen field.

mod chain_option;
mod option_chain;

pub use chain_option::ChainOption;
pub use option_chain::{Boundary, ChainField, OptionChain};
