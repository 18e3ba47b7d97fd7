//! Spread Variant Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required count of distinct values (strikes or expirations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountRule {
    /// Exactly this many.
    Exactly(usize),
    /// At least this many.
    AtLeast(usize),
}

impl CountRule {
    /// Check whether `count` satisfies the rule.
    #[must_use]
    pub const fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == *n,
            Self::AtLeast(n) => count >= *n,
        }
    }
}

impl fmt::Display for CountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Structural shape of a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadVariant {
    /// Single option (not a spread).
    Single,
    /// Vertical spread (same expiry, different strikes).
    Vertical,
    /// Diagonal spread (different strikes and expiries).
    Diagonal,
    /// Calendar spread (same strike, different expiries).
    Calendar,
    /// Closing pair and opening pair rolled across two expiries.
    CalendarRoll,
}

impl Default for SpreadVariant {
    fn default() -> Self {
        Self::Single
    }
}

impl fmt::Display for SpreadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Vertical => write!(f, "Vertical"),
            Self::Diagonal => write!(f, "Diagonal"),
            Self::Calendar => write!(f, "Calendar"),
            Self::CalendarRoll => write!(f, "Calendar Roll"),
        }
    }
}

impl SpreadVariant {
    /// Number of legs the variant requires.
    #[must_use]
    pub const fn leg_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Vertical | Self::Diagonal | Self::Calendar => 2,
            Self::CalendarRoll => 4,
        }
    }

    /// Distinct strikes the variant requires.
    #[must_use]
    pub const fn strike_rule(&self) -> CountRule {
        match self {
            Self::Single | Self::Calendar => CountRule::Exactly(1),
            Self::Vertical | Self::Diagonal => CountRule::Exactly(2),
            Self::CalendarRoll => CountRule::AtLeast(2),
        }
    }

    /// Distinct expirations the variant requires.
    #[must_use]
    pub const fn expiration_rule(&self) -> CountRule {
        match self {
            Self::Single | Self::Vertical => CountRule::Exactly(1),
            Self::Diagonal | Self::Calendar | Self::CalendarRoll => CountRule::Exactly(2),
        }
    }

    /// Check if this is a multi-leg spread.
    #[must_use]
    pub const fn is_spread(&self) -> bool {
        !matches!(self, Self::Single)
    }

    /// Check if the legs span more than one expiration.
    #[must_use]
    pub const fn is_multi_expiry(&self) -> bool {
        matches!(self, Self::Diagonal | Self::Calendar | Self::CalendarRoll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_default() {
        assert_eq!(SpreadVariant::default(), SpreadVariant::Single);
    }

    #[test]
    fn variant_display() {
        assert_eq!(SpreadVariant::Vertical.to_string(), "Vertical");
        assert_eq!(SpreadVariant::CalendarRoll.to_string(), "Calendar Roll");
    }

    #[test]
    fn variant_structural_rules() {
        assert_eq!(SpreadVariant::Single.leg_count(), 1);
        assert_eq!(SpreadVariant::Diagonal.leg_count(), 2);
        assert_eq!(SpreadVariant::CalendarRoll.leg_count(), 4);

        assert_eq!(SpreadVariant::Calendar.strike_rule(), CountRule::Exactly(1));
        assert_eq!(SpreadVariant::CalendarRoll.strike_rule(), CountRule::AtLeast(2));
        assert_eq!(SpreadVariant::Vertical.expiration_rule(), CountRule::Exactly(1));
        assert_eq!(SpreadVariant::Diagonal.expiration_rule(), CountRule::Exactly(2));
    }

    #[test]
    fn variant_predicates() {
        assert!(!SpreadVariant::Single.is_spread());
        assert!(SpreadVariant::Vertical.is_spread());
        assert!(!SpreadVariant::Vertical.is_multi_expiry());
        assert!(SpreadVariant::Calendar.is_multi_expiry());
    }

    #[test]
    fn count_rule_accepts() {
        assert!(CountRule::Exactly(2).accepts(2));
        assert!(!CountRule::Exactly(2).accepts(3));
        assert!(CountRule::AtLeast(2).accepts(3));
        assert!(!CountRule::AtLeast(2).accepts(1));
        assert_eq!(CountRule::AtLeast(2).to_string(), "at least 2");
    }

    #[test]
    fn variant_serde() {
        let json = serde_json::to_string(&SpreadVariant::CalendarRoll).unwrap();
        assert_eq!(json, "\"calendar_roll\"");

        let parsed: SpreadVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SpreadVariant::CalendarRoll);
    }
}
