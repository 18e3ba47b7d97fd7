//! Classification configuration.

use serde::{Deserialize, Serialize};

use crate::domain::spread::SidePolicy;

/// Classifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassificationConfig {
    /// How long/short sides are checked.
    #[serde(default)]
    pub side_policy: SidePolicy,
}
