//! Spread Value Objects

mod leg;
mod leg_set;
mod variant;

pub use leg::{Direction, Leg, LegAction, PositionSide};
pub use leg_set::LegSet;
pub use variant::{CountRule, SpreadVariant};
