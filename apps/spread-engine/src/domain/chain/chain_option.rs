//! Chain Option Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::quote::{OptionQuote, QuoteHandle};
use crate::domain::shared::{OptionRight, Symbol, SymbolError};

/// One listed contract in an option chain.
#[derive(Debug, Clone)]
pub struct ChainOption {
    symbol: Symbol,
    right: OptionRight,
    strike: Decimal,
    expiration: NaiveDate,
    quote: QuoteHandle,
}

impl ChainOption {
    /// Create a chain option with no quote.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, right: OptionRight, strike: Decimal, expiration: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            right,
            strike,
            expiration,
            quote: QuoteHandle::empty(),
        }
    }

    /// Create a chain option from an OSI symbol.
    pub fn from_osi(symbol: impl Into<Symbol>) -> Result<Self, SymbolError> {
        let symbol = symbol.into();
        let osi = symbol.parse_osi()?;
        Ok(Self::new(symbol, osi.right, osi.strike, osi.expiration))
    }

    /// Share a quote handle.
    #[must_use]
    pub fn with_quote_handle(mut self, quote: QuoteHandle) -> Self {
        self.quote = quote;
        self
    }

    /// Attach a private handle holding `quote`.
    #[must_use]
    pub fn with_quote(self, quote: OptionQuote) -> Self {
        self.with_quote_handle(QuoteHandle::with_quote(quote))
    }

    /// OSI identifier.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Call or put.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Check if this is a put.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        self.right.is_put()
    }

    /// Check if this is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        self.right.is_call()
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Shared quote handle.
    #[must_use]
    pub const fn quote_handle(&self) -> &QuoteHandle {
        &self.quote
    }

    /// Current quote snapshot.
    #[must_use]
    pub fn quote(&self) -> Option<Arc<OptionQuote>> {
        self.quote.snapshot()
    }

    /// Calendar days from `as_of` to expiration (negative once expired).
    #[must_use]
    pub fn days_to_expiration(&self, as_of: NaiveDate) -> i64 {
        (self.expiration - as_of).num_days()
    }

    /// Current delta.
    #[must_use]
    pub fn delta(&self) -> Option<Decimal> {
        self.quote().and_then(|q| q.delta())
    }

    /// In-the-money amount at `underlying_price`.
    #[must_use]
    pub fn intrinsic(&self, underlying_price: Decimal) -> Decimal {
        let itm = match self.right {
            OptionRight::Call => underlying_price - self.strike,
            OptionRight::Put => self.strike - underlying_price,
        };
        itm.max(Decimal::ZERO)
    }

    /// Time value: quoted mid less intrinsic value.
    #[must_use]
    pub fn extrinsic(&self, underlying_price: Decimal) -> Option<Decimal> {
        let mid = self.quote()?.mid()?;
        Some(mid - self.intrinsic(underlying_price))
    }
}
