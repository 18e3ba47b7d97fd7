//! Option quote snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Greeks;
use crate::domain::shared::Symbol;

/// One vendor quote for a contract, frozen at `as_of`.
///
/// Vendors routinely omit fields (no greeks outside market hours, one-sided
/// books), so every price field is optional. Consumers report absence
/// instead of substituting zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// OSI or equity symbol the quote belongs to.
    pub symbol: Symbol,
    /// Best bid.
    pub bid: Option<Decimal>,
    /// Best ask.
    pub ask: Option<Decimal>,
    /// Greeks, when the vendor supplies them.
    pub greeks: Option<Greeks>,
    /// Implied volatility.
    pub implied_volatility: Option<Decimal>,
    /// Quote time.
    pub as_of: DateTime<Utc>,
}

impl OptionQuote {
    /// Create an empty quote for a symbol.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            bid: None,
            ask: None,
            greeks: None,
            implied_volatility: None,
            as_of: Utc::now(),
        }
    }

    /// Set bid and ask.
    #[must_use]
    pub const fn with_bid_ask(mut self, bid: Decimal, ask: Decimal) -> Self {
        self.bid = Some(bid);
        self.ask = Some(ask);
        self
    }

    /// Set the greeks.
    #[must_use]
    pub const fn with_greeks(mut self, greeks: Greeks) -> Self {
        self.greeks = Some(greeks);
        self
    }

    /// Set implied volatility.
    #[must_use]
    pub const fn with_implied_volatility(mut self, iv: Decimal) -> Self {
        self.implied_volatility = Some(iv);
        self
    }

    /// Delta, if quoted.
    #[must_use]
    pub fn delta(&self) -> Option<Decimal> {
        self.greeks.map(|g| g.delta)
    }

    /// Gamma, if quoted.
    #[must_use]
    pub fn gamma(&self) -> Option<Decimal> {
        self.greeks.map(|g| g.gamma)
    }

    /// Unrounded bid/ask average.
    #[must_use]
    pub fn mid(&self) -> Option<Decimal> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::TWO),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_quote_has_no_prices() {
        let q = OptionQuote::new("SPY   250117P00450000");
        assert_eq!(q.bid, None);
        assert_eq!(q.delta(), None);
        assert_eq!(q.mid(), None);
    }

    #[test]
    fn quote_builders() {
        let q = OptionQuote::new("SPY   250117P00450000")
            .with_bid_ask(dec!(3.00), dec!(3.20))
            .with_greeks(Greeks::with_delta_gamma(dec!(-0.70), dec!(0.10)))
            .with_implied_volatility(dec!(0.21));

        assert_eq!(q.mid(), Some(dec!(3.10)));
        assert_eq!(q.delta(), Some(dec!(-0.70)));
        assert_eq!(q.gamma(), Some(dec!(0.10)));
        assert_eq!(q.implied_volatility, Some(dec!(0.21)));
    }

    #[test]
    fn one_sided_quote_has_no_mid() {
        let mut q = OptionQuote::new("SPY").with_bid_ask(dec!(1), dec!(2));
        q.ask = None;
        assert_eq!(q.mid(), None);
    }
}
