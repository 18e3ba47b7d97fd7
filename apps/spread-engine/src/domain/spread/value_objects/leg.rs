//! Spread Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::quote::{Greeks, OptionQuote, QuoteHandle};
use crate::domain::shared::{OptionRight, Symbol, SymbolError};

/// Position side (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionSide {
    /// Get the sign multiplier for this side.
    #[must_use]
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }

    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    /// Check if this is a short position.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }
}

/// Whether a leg opens or closes a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Opens (or adds to) a position.
    Opening,
    /// Closes (or reduces) a position.
    Closing,
}

/// Order action implied by side and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegAction {
    /// Long + opening.
    BuyToOpen,
    /// Short + opening.
    SellToOpen,
    /// Long + closing.
    BuyToClose,
    /// Short + closing.
    SellToClose,
}

/// One contract within an order or position.
///
/// Static attributes are fixed at construction. Live pricing is read through
/// a [`QuoteHandle`] shared with the quote registry, so quote refreshes are
/// visible without rebuilding the leg.
#[derive(Debug, Clone)]
pub struct Leg {
    /// OSI (or equity) symbol.
    symbol: Symbol,
    /// Underlying root.
    underlying: String,
    /// Call or put; `None` for an equity leg.
    right: Option<OptionRight>,
    /// Strike price (zero for equity).
    strike: Decimal,
    /// Expiration date (`None` for equity).
    expiration: Option<NaiveDate>,
    /// Position side.
    side: PositionSide,
    /// Opening or closing.
    direction: Direction,
    /// Contracts filled so far.
    filled_quantity: u32,
    /// Contracts still working.
    unfilled_quantity: u32,
    /// Live quote.
    quote: QuoteHandle,
}

impl Leg {
    /// Create an option leg.
    #[must_use]
    pub fn option(
        symbol: impl Into<Symbol>,
        underlying: impl Into<String>,
        right: OptionRight,
        strike: Decimal,
        expiration: NaiveDate,
        side: PositionSide,
        direction: Direction,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            underlying: underlying.into(),
            right: Some(right),
            strike,
            expiration: Some(expiration),
            side,
            direction,
            filled_quantity: 0,
            unfilled_quantity: 0,
            quote: QuoteHandle::empty(),
        }
    }

    /// Create an option leg from its OSI symbol.
    pub fn from_osi(
        symbol: impl Into<Symbol>,
        side: PositionSide,
        direction: Direction,
    ) -> Result<Self, SymbolError> {
        let symbol = symbol.into();
        let osi = symbol.parse_osi()?;
        Ok(Self::option(
            symbol,
            osi.root,
            osi.right,
            osi.strike,
            osi.expiration,
            side,
            direction,
        ))
    }

    /// Create an equity leg.
    #[must_use]
    pub fn equity(symbol: impl Into<Symbol>, side: PositionSide, direction: Direction) -> Self {
        let symbol = symbol.into();
        Self {
            underlying: symbol.as_str().to_string(),
            symbol,
            right: None,
            strike: Decimal::ZERO,
            expiration: None,
            side,
            direction,
            filled_quantity: 0,
            unfilled_quantity: 0,
            quote: QuoteHandle::empty(),
        }
    }

    /// Set filled quantity.
    #[must_use]
    pub fn with_filled_quantity(mut self, quantity: u32) -> Self {
        self.filled_quantity = quantity;
        self
    }

    /// Set unfilled quantity.
    #[must_use]
    pub fn with_unfilled_quantity(mut self, quantity: u32) -> Self {
        self.unfilled_quantity = quantity;
        self
    }

    /// Attach a shared quote handle (usually from the quote registry).
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

    /// Underlying root.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Option right, `None` for equity.
    #[must_use]
    pub const fn right(&self) -> Option<OptionRight> {
        self.right
    }

    /// Check if this is a put.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.right, Some(OptionRight::Put))
    }

    /// Check if this is a call.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.right, Some(OptionRight::Call))
    }

    /// Check if this is an equity leg.
    #[must_use]
    pub const fn is_equity(&self) -> bool {
        self.right.is_none()
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Expiration date.
    #[must_use]
    pub const fn expiration(&self) -> Option<NaiveDate> {
        self.expiration
    }

    /// Position side.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        self.side
    }

    /// Opening or closing.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if the leg opens a position.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        matches!(self.direction, Direction::Opening)
    }

    /// Check if the leg closes a position.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        matches!(self.direction, Direction::Closing)
    }

    /// Filled contracts.
    #[must_use]
    pub const fn filled_quantity(&self) -> u32 {
        self.filled_quantity
    }

    /// Working contracts.
    #[must_use]
    pub const fn unfilled_quantity(&self) -> u32 {
        self.unfilled_quantity
    }

    /// Order action for this leg.
    #[must_use]
    pub const fn action(&self) -> LegAction {
        match (self.direction, self.side) {
            (Direction::Opening, PositionSide::Long) => LegAction::BuyToOpen,
            (Direction::Opening, PositionSide::Short) => LegAction::SellToOpen,
            (Direction::Closing, PositionSide::Long) => LegAction::BuyToClose,
            (Direction::Closing, PositionSide::Short) => LegAction::SellToClose,
        }
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

    /// Current bid.
    #[must_use]
    pub fn bid(&self) -> Option<Decimal> {
        self.quote().and_then(|q| q.bid)
    }

    /// Current ask.
    #[must_use]
    pub fn ask(&self) -> Option<Decimal> {
        self.quote().and_then(|q| q.ask)
    }

    /// Current greeks.
    #[must_use]
    pub fn greeks(&self) -> Option<Greeks> {
        self.quote().and_then(|q| q.greeks)
    }

    /// Current delta.
    #[must_use]
    pub fn delta(&self) -> Option<Decimal> {
        self.greeks().map(|g| g.delta)
    }

    /// Current gamma.
    #[must_use]
    pub fn gamma(&self) -> Option<Decimal> {
        self.greeks().map(|g| g.gamma)
    }
}
