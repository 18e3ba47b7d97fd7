//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Classified spreads with their structural invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (classification, projection)
//!
//! # Bounded Contexts
//!
//! - [`shared`]: Symbols and option rights
//! - [`quote`]: Quote snapshots and the handles that share them
//! - [`spread`]: Leg sets, classification and price projection
//! - [`chain`]: Option chain filtering and extreme selection

pub mod chain;
pub mod quote;
pub mod shared;
pub mod spread;
