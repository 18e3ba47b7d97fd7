//! Body/wing resolution per option kind.
//!
//! The body (anchor) is the leg nearer the money and decides the spread's
//! reported side and direction; the wing is the hedge further out.
//!
//! | Kind  | Body          | Wing          |
//! |-------|---------------|---------------|
//! | Puts  | highest strike| lowest strike |
//! | Calls | lowest strike | highest strike|

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::shared::OptionRight;
use crate::domain::spread::value_objects::{Leg, LegSet};

/// Decimal places of a quoted midpoint (cents).
pub const MIDPOINT_SCALE: u32 = 2;

/// Moneyness rule for a uniform put or call leg set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Moneyness {
    /// Put legs: higher strike is nearer the money.
    Puts,
    /// Call legs: lower strike is nearer the money.
    Calls,
}

impl Moneyness {
    /// Rule for an option right.
    #[must_use]
    pub const fn for_right(right: OptionRight) -> Self {
        match right {
            OptionRight::Put => Self::Puts,
            OptionRight::Call => Self::Calls,
        }
    }

    /// Option right this rule applies to.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        match self {
            Self::Puts => OptionRight::Put,
            Self::Calls => OptionRight::Call,
        }
    }

    /// Strike of the body leg.
    #[must_use]
    pub fn body_strike(&self, legs: &LegSet) -> Option<Decimal> {
        let strikes = legs.strikes();
        match self {
            Self::Puts => strikes.last().copied(),
            Self::Calls => strikes.first().copied(),
        }
    }

    /// Strike of the wing leg.
    #[must_use]
    pub fn wing_strike(&self, legs: &LegSet) -> Option<Decimal> {
        let strikes = legs.strikes();
        match self {
            Self::Puts => strikes.first().copied(),
            Self::Calls => strikes.last().copied(),
        }
    }

    /// Indices of the (body, wing) legs.
    ///
    /// When several legs share the body or wing strike (calendars, rolls),
    /// the nearer expiration wins, then leg order. The wing is never the
    /// body leg unless the set has a single leg.
    #[must_use]
    pub fn resolve(&self, legs: &LegSet) -> Option<(usize, usize)> {
        let body_strike = self.body_strike(legs)?;
        let wing_strike = self.wing_strike(legs)?;

        let body = nearest_at_strike(legs.legs(), body_strike, None)?;
        if legs.len() == 1 {
            return Some((body, body));
        }
        let wing = nearest_at_strike(legs.legs(), wing_strike, Some(body))?;
        Some((body, wing))
    }

    /// Signed displacement of the underlying relative to `target`.
    ///
    /// Positive means the spread is moving further out of the money.
    #[must_use]
    pub fn displacement(&self, underlying: Decimal, target: Decimal) -> Decimal {
        match self {
            Self::Puts => underlying - target,
            Self::Calls => target - underlying,
        }
    }
}

fn nearest_at_strike(legs: &[Leg], strike: Decimal, exclude: Option<usize>) -> Option<usize> {
    legs.iter()
        .enumerate()
        .filter(|(i, l)| Some(*i) != exclude && l.strike() == strike)
        .min_by_key(|(i, l)| (l.expiration(), *i))
        .map(|(i, _)| i)
}

/// Combo bid: body bid less wing ask.
#[must_use]
pub fn combo_bid(body_bid: Decimal, wing_ask: Decimal) -> Decimal {
    body_bid - wing_ask
}

/// Combo ask: body ask less wing bid.
#[must_use]
pub fn combo_ask(body_ask: Decimal, wing_bid: Decimal) -> Decimal {
    body_ask - wing_bid
}

/// Average of bid and ask rounded half-down (ties toward zero) to `scale`
/// decimal places.
#[must_use]
pub fn midpoint(bid: Decimal, ask: Decimal, scale: u32) -> Decimal {
    ((bid + ask) / Decimal::TWO).round_dp_with_strategy(scale, RoundingStrategy::MidpointTowardZero)
}
