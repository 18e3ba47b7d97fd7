//! Spread Bounded Context
//!
//! Classifies option legs into typed spreads and prices them:
//! - Legs, leg sets and the variant table
//! - Classification with structural errors
//! - Body/wing resolution per option kind
//! - Delta/gamma price projection

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregate::{Spread, SpreadRoll, SpreadSnapshot, SpreadSummary};
pub use errors::{ComputationError, QuoteField, StructuralError, Violation};
pub use services::{
    Classifier, Moneyness, NoTrace, ProjectionParams, ProjectionTrace, SidePolicy, TracingTrace, classify,
};
pub use value_objects::{CountRule, Direction, Leg, LegAction, LegSet, PositionSide, SpreadVariant};
