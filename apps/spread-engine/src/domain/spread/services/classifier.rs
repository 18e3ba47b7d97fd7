//! Leg set classification.
//!
//! Checks run in a fixed order and stop at the first failure:
//! leg count, option kind, sides, distinct expirations, distinct strikes.

use serde::{Deserialize, Serialize};

use super::moneyness::Moneyness;
use super::projection::ProjectionParams;
use crate::domain::spread::aggregate::Spread;
use crate::domain::spread::errors::{StructuralError, Violation};
use crate::domain::spread::value_objects::{LegSet, PositionSide, SpreadVariant};

/// How strictly long/short sides are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidePolicy {
    /// Two-leg spreads need one long and one short leg; calendar rolls need
    /// two of each. Singles may be either side.
    #[default]
    Balanced,
    /// Sides are not checked.
    Permissive,
}

impl SidePolicy {
    /// Check the side mix of `legs` for `variant`.
    pub fn check(&self, variant: SpreadVariant, legs: &LegSet) -> Result<(), Violation> {
        if matches!(self, Self::Permissive) || variant == SpreadVariant::Single {
            return Ok(());
        }

        let longs = legs.count_side(PositionSide::Long);
        let shorts = legs.count_side(PositionSide::Short);
        let per_side = variant.leg_count() / 2;
        if longs == per_side && shorts == per_side {
            Ok(())
        } else {
            Err(Violation::SideImbalance { longs, shorts })
        }
    }
}

/// Turns leg sets into typed spreads.
///
/// Spreads remember the classifier's [`ProjectionParams`], so their midpoint
/// and default projection agree on rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    side_policy: SidePolicy,
    params: ProjectionParams,
}

impl Classifier {
    /// Create a classifier with the given side policy and default pricing.
    #[must_use]
    pub fn new(side_policy: SidePolicy) -> Self {
        Self {
            side_policy,
            params: ProjectionParams::default(),
        }
    }

    /// Use `params` for every spread this classifier builds.
    #[must_use]
    pub const fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    /// Side policy in effect.
    #[must_use]
    pub const fn side_policy(&self) -> SidePolicy {
        self.side_policy
    }

    /// Pricing handed to built spreads.
    #[must_use]
    pub const fn params(&self) -> ProjectionParams {
        self.params
    }

    /// Variant a leg set should be attempted as.
    ///
    /// Two legs become Vertical when they share one expiration, Calendar
    /// when they share one strike, otherwise Diagonal. Counts with no
    /// variant fall to the nearest shape so the leg-count check reports them.
    #[must_use]
    pub fn infer_variant(legs: &LegSet) -> SpreadVariant {
        match legs.len() {
            0 | 1 => SpreadVariant::Single,
            2 | 3 => {
                if legs.expirations().len() <= 1 {
                    SpreadVariant::Vertical
                } else if legs.strikes().len() == 1 {
                    SpreadVariant::Calendar
                } else {
                    SpreadVariant::Diagonal
                }
            }
            _ => SpreadVariant::CalendarRoll,
        }
    }

    /// Classify `legs` as whatever variant their shape suggests.
    pub fn classify(&self, legs: &LegSet) -> Result<Spread, StructuralError> {
        self.classify_as(Self::infer_variant(legs), legs)
    }

    /// Classify `legs` as exactly `variant`.
    pub fn classify_as(&self, variant: SpreadVariant, legs: &LegSet) -> Result<Spread, StructuralError> {
        match self.build(variant, legs) {
            Ok(spread) => {
                tracing::debug!(
                    variant = %variant,
                    legs = legs.len(),
                    strike = %spread.strike(),
                    "classified leg set"
                );
                Ok(spread)
            }
            Err(violation) => {
                tracing::debug!(variant = %variant, %violation, "leg set rejected");
                Err(StructuralError {
                    attempted: variant,
                    violation,
                    offending_legs: legs.legs().to_vec(),
                })
            }
        }
    }

    fn build(&self, variant: SpreadVariant, legs: &LegSet) -> Result<Spread, Violation> {
        let expected = variant.leg_count();
        if legs.len() != expected {
            return Err(Violation::LegCount {
                expected,
                actual: legs.len(),
            });
        }

        let moneyness = if legs.is_put_set() {
            Moneyness::Puts
        } else if legs.is_call_set() {
            Moneyness::Calls
        } else {
            return Err(Violation::MixedOptionKind);
        };

        self.side_policy.check(variant, legs)?;

        let expirations = legs.expirations();
        let rule = variant.expiration_rule();
        if !rule.accepts(expirations.len()) {
            return Err(Violation::ExpirationCount {
                expected: rule,
                actual: expirations.len(),
            });
        }

        let strikes = legs.strikes().len();
        let rule = variant.strike_rule();
        if !rule.accepts(strikes) {
            return Err(Violation::StrikeCount {
                expected: rule,
                actual: strikes,
            });
        }

        // Option legs always carry an expiration, so the set is non-empty here.
        let (Some(&min_expiration), Some(&max_expiration)) = (expirations.first(), expirations.last()) else {
            return Err(Violation::MixedOptionKind);
        };
        let Some((body, wing)) = moneyness.resolve(legs) else {
            return Err(Violation::LegCount {
                expected,
                actual: legs.len(),
            });
        };

        Ok(Spread::from_parts(
            variant,
            legs.clone(),
            moneyness,
            body,
            wing,
            (min_expiration, max_expiration),
            *self,
        ))
    }
}

/// Classify `legs` with the default (balanced) side policy.
pub fn classify(legs: &LegSet) -> Result<Spread, StructuralError> {
    Classifier::default().classify(legs)
}
