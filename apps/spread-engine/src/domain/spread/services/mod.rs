//! Spread Domain Services

mod classifier;
mod moneyness;
mod projection;

pub use classifier::{Classifier, SidePolicy, classify};
pub use moneyness::{MIDPOINT_SCALE, Moneyness, combo_ask, combo_bid, midpoint};
pub use projection::{
    MAX_PROJECTION_STEPS, NoTrace, ProjectionInputs, ProjectionOutcome, ProjectionParams, ProjectionStart,
    ProjectionStep, ProjectionTrace, TracingTrace, project,
};
