//! Price projection configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::spread::services::MAX_PROJECTION_STEPS;

/// Gamma adjustment factors for the price projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Gamma multiplier per dollar moved out of the money.
    #[serde(default = "default_gamma_growth")]
    pub gamma_growth: Decimal,
    /// Gamma multiplier per dollar moved into the money.
    #[serde(default = "default_gamma_decay")]
    pub gamma_decay: Decimal,
    /// Largest whole-dollar displacement a projection will walk.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            gamma_growth: default_gamma_growth(),
            gamma_decay: default_gamma_decay(),
            max_steps: default_max_steps(),
        }
    }
}

fn default_gamma_growth() -> Decimal {
    dec!(1.10)
}

fn default_gamma_decay() -> Decimal {
    dec!(0.90)
}

const fn default_max_steps() -> u64 {
    MAX_PROJECTION_STEPS
}
