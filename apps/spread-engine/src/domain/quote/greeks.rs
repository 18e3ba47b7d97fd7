//! Options Greeks value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Option price sensitivities as quoted by a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta - change in option price per $1 move in the underlying.
    pub delta: Decimal,
    /// Gamma - change in delta per $1 move in the underlying.
    pub gamma: Decimal,
    /// Vega - sensitivity to implied volatility.
    pub vega: Decimal,
    /// Theta - time decay per day.
    pub theta: Decimal,
    /// Rho - sensitivity to interest rates.
    pub rho: Decimal,
}

impl Greeks {
    /// Create new Greeks.
    #[must_use]
    pub const fn new(
        delta: Decimal,
        gamma: Decimal,
        vega: Decimal,
        theta: Decimal,
        rho: Decimal,
    ) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Create Greeks with just delta and gamma, the inputs of price projection.
    #[must_use]
    pub fn with_delta_gamma(delta: Decimal, gamma: Decimal) -> Self {
        Self {
            delta,
            gamma,
            ..Default::default()
        }
    }

    /// Zero Greeks.
    pub const ZERO: Self = Self {
        delta: Decimal::ZERO,
        gamma: Decimal::ZERO,
        vega: Decimal::ZERO,
        theta: Decimal::ZERO,
        rho: Decimal::ZERO,
    };

    /// Scale Greeks by a factor (e.g., side sign or contract count).
    #[must_use]
    pub fn scale(&self, factor: Decimal) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }
}

impl Add for Greeks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            vega: self.vega + rhs.vega,
            theta: self.theta + rhs.theta,
            rho: self.rho + rhs.rho,
        }
    }
}
