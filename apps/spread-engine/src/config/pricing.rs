//! Spread pricing configuration.

use serde::{Deserialize, Serialize};

use crate::domain::spread::services::MIDPOINT_SCALE;

/// Pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Decimal places the midpoint is rounded to.
    #[serde(default = "default_midpoint_scale")]
    pub midpoint_scale: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            midpoint_scale: default_midpoint_scale(),
        }
    }
}

const fn default_midpoint_scale() -> u32 {
    MIDPOINT_SCALE
}
