//! Spread Aggregate
//!
//! A classified leg set with its body and wing resolved. Only the
//! [`Classifier`](super::services::Classifier) builds one, so every
//! `Spread` satisfies its variant's structural rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use super::errors::{ComputationError, QuoteField, StructuralError};
use super::services::{
    Classifier, Moneyness, NoTrace, ProjectionInputs, ProjectionParams, ProjectionTrace, TracingTrace,
    combo_ask, combo_bid, midpoint, project,
};
use super::value_objects::{Direction, Leg, LegSet, PositionSide, SpreadVariant};
use crate::domain::quote::{Greeks, OptionQuote};
use crate::domain::shared::{OptionRight, Symbol};

/// A typed options spread.
#[derive(Debug, Clone)]
pub struct Spread {
    variant: SpreadVariant,
    legs: LegSet,
    moneyness: Moneyness,
    body: usize,
    wing: usize,
    min_expiration: NaiveDate,
    max_expiration: NaiveDate,
    classifier: Classifier,
}

impl Spread {
    pub(crate) fn from_parts(
        variant: SpreadVariant,
        legs: LegSet,
        moneyness: Moneyness,
        body: usize,
        wing: usize,
        (min_expiration, max_expiration): (NaiveDate, NaiveDate),
        classifier: Classifier,
    ) -> Self {
        Self {
            variant,
            legs,
            moneyness,
            body,
            wing,
            min_expiration,
            max_expiration,
            classifier,
        }
    }

    /// Structural variant.
    #[must_use]
    pub const fn variant(&self) -> SpreadVariant {
        self.variant
    }

    /// Legs as classified.
    #[must_use]
    pub const fn legs(&self) -> &LegSet {
        &self.legs
    }

    /// Body/wing rule for the legs' option kind.
    #[must_use]
    pub const fn moneyness(&self) -> Moneyness {
        self.moneyness
    }

    /// Rounding and projection factors inherited from the classifier.
    #[must_use]
    pub const fn params(&self) -> ProjectionParams {
        self.classifier.params()
    }

    /// Option right shared by every leg.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.moneyness.right()
    }

    /// Check if all legs are puts.
    #[must_use]
    pub const fn is_puts(&self) -> bool {
        matches!(self.moneyness, Moneyness::Puts)
    }

    /// Check if all legs are calls.
    #[must_use]
    pub const fn is_calls(&self) -> bool {
        matches!(self.moneyness, Moneyness::Calls)
    }

    /// False for a single option.
    #[must_use]
    pub const fn is_spread(&self) -> bool {
        self.variant.is_spread()
    }

    /// Check if this is a vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.variant == SpreadVariant::Vertical
    }

    /// Check if this is a diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.variant == SpreadVariant::Diagonal
    }

    /// Check if this is a calendar.
    #[must_use]
    pub fn is_calendar(&self) -> bool {
        self.variant == SpreadVariant::Calendar
    }

    /// Check if this is a calendar roll.
    #[must_use]
    pub fn is_calendar_roll(&self) -> bool {
        self.variant == SpreadVariant::CalendarRoll
    }

    /// Underlying root.
    #[must_use]
    pub fn underlying(&self) -> &str {
        self.body_leg().underlying()
    }

    /// Leg nearer the money.
    #[must_use]
    pub fn body_leg(&self) -> &Leg {
        &self.legs.legs()[self.body]
    }

    /// Hedge leg further from the money. Same as the body for a single.
    #[must_use]
    pub fn wing_leg(&self) -> &Leg {
        &self.legs.legs()[self.wing]
    }

    /// Body strike.
    #[must_use]
    pub fn strike(&self) -> Decimal {
        self.body_leg().strike()
    }

    /// Wing strike.
    #[must_use]
    pub fn wing_strike(&self) -> Decimal {
        self.wing_leg().strike()
    }

    /// The expiration of a single-expiry shape. Calendars report the body's.
    #[must_use]
    pub fn expiration(&self) -> Option<NaiveDate> {
        match self.variant {
            SpreadVariant::Single | SpreadVariant::Vertical | SpreadVariant::Calendar => {
                self.body_leg().expiration()
            }
            SpreadVariant::Diagonal | SpreadVariant::CalendarRoll => None,
        }
    }

    /// Nearest expiration across legs.
    #[must_use]
    pub const fn min_expiration(&self) -> NaiveDate {
        self.min_expiration
    }

    /// Furthest expiration across legs.
    #[must_use]
    pub const fn max_expiration(&self) -> NaiveDate {
        self.max_expiration
    }

    /// Body leg's side.
    #[must_use]
    pub fn side(&self) -> PositionSide {
        self.body_leg().side()
    }

    /// Body leg's direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.body_leg().direction()
    }

    /// Check if the body is short (a credit spread when opening).
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.side().is_short()
    }

    /// Check if the body is long.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.side().is_long()
    }

    /// Check if the body opens a position.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.body_leg().is_opening()
    }

    /// Check if the body closes a position.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.body_leg().is_closing()
    }

    /// Filled contracts of the body.
    #[must_use]
    pub fn filled_quantity(&self) -> u32 {
        self.body_leg().filled_quantity()
    }

    /// Working contracts of the body.
    #[must_use]
    pub fn unfilled_quantity(&self) -> u32 {
        self.body_leg().unfilled_quantity()
    }

    /// Net limit price of the order.
    #[must_use]
    pub const fn limit_price(&self) -> Option<Decimal> {
        self.legs.limit_price()
    }

    /// Limit price per filled contract.
    pub fn unit_price(&self) -> Result<Decimal, ComputationError> {
        let limit = self.limit_price().ok_or(ComputationError::MissingLimitPrice)?;
        match self.filled_quantity() {
            0 => Err(ComputationError::NoFilledQuantity),
            filled => Ok(limit / Decimal::from(filled)),
        }
    }

    /// Capture every leg's current quote once.
    ///
    /// Derived prices read from the snapshot stay consistent even if quotes
    /// are replaced while they are computed.
    #[must_use]
    pub fn snapshot(&self) -> SpreadSnapshot<'_> {
        SpreadSnapshot {
            spread: self,
            quotes: self.legs.iter().map(Leg::quote).collect(),
        }
    }

    /// Current combo bid.
    pub fn bid(&self) -> Result<Decimal, ComputationError> {
        self.snapshot().bid()
    }

    /// Current combo ask.
    pub fn ask(&self) -> Result<Decimal, ComputationError> {
        self.snapshot().ask()
    }

    /// Current midpoint, rounded half-down to the configured scale.
    pub fn midpoint(&self) -> Result<Decimal, ComputationError> {
        self.snapshot().midpoint(self.params().midpoint_scale)
    }

    /// Net side-signed delta.
    pub fn delta(&self) -> Result<Decimal, ComputationError> {
        self.snapshot().delta()
    }

    /// Net side-signed gamma.
    pub fn gamma(&self) -> Result<Decimal, ComputationError> {
        self.snapshot().gamma()
    }

    /// Net side-signed greeks.
    pub fn greeks(&self) -> Result<Greeks, ComputationError> {
        self.snapshot().greeks()
    }

    /// Project the midpoint if the underlying moved from `underlying` to
    /// `target`, with the factors this spread was classified with. `debug`
    /// emits each step as a `tracing` debug event.
    pub fn project_price_at(
        &self,
        underlying: Decimal,
        target: Decimal,
        debug: bool,
    ) -> Result<Decimal, ComputationError> {
        let params = self.params();
        if debug {
            self.project_price_with(underlying, target, &params, &mut TracingTrace)
        } else {
            self.project_price_with(underlying, target, &params, &mut NoTrace)
        }
    }

    /// Project with explicit factors and trace sink.
    pub fn project_price_with(
        &self,
        underlying: Decimal,
        target: Decimal,
        params: &ProjectionParams,
        trace: &mut dyn ProjectionTrace,
    ) -> Result<Decimal, ComputationError> {
        let inputs = self.snapshot().projection_inputs(params.midpoint_scale)?;
        let difference = self.moneyness.displacement(underlying, target);
        project(&inputs, difference, params, trace)
    }

    /// Closing/opening view of a calendar roll.
    #[must_use]
    pub fn roll(&self) -> Option<SpreadRoll<'_>> {
        self.is_calendar_roll().then_some(SpreadRoll { spread: self })
    }

    /// Reporting view. Prices are omitted when quotes are incomplete.
    #[must_use]
    pub fn summary(&self) -> SpreadSummary {
        let snapshot = self.snapshot();
        SpreadSummary {
            variant: self.variant,
            underlying: self.underlying().to_string(),
            right: self.right(),
            strike: self.strike(),
            wing_strike: self.wing_strike(),
            expiration: self.expiration(),
            min_expiration: self.min_expiration,
            max_expiration: self.max_expiration,
            side: self.side(),
            direction: self.direction(),
            legs: self.legs.iter().map(|l| l.symbol().clone()).collect(),
            filled_quantity: self.filled_quantity(),
            limit_price: self.limit_price(),
            bid: snapshot.bid().ok(),
            ask: snapshot.ask().ok(),
            midpoint: snapshot.midpoint(self.params().midpoint_scale).ok(),
        }
    }
}

/// Quotes of every leg captured at one instant.
#[derive(Debug, Clone)]
pub struct SpreadSnapshot<'a> {
    spread: &'a Spread,
    quotes: Vec<Option<Arc<OptionQuote>>>,
}

impl SpreadSnapshot<'_> {
    fn missing(&self, index: usize, field: QuoteField) -> ComputationError {
        ComputationError::MissingQuoteField {
            symbol: self.spread.legs.legs()[index].symbol().clone(),
            field,
        }
    }

    fn field<T>(
        &self,
        index: usize,
        field: QuoteField,
        read: impl Fn(&OptionQuote) -> Option<T>,
    ) -> Result<T, ComputationError> {
        let quote = self.quotes[index]
            .as_deref()
            .ok_or_else(|| self.missing(index, QuoteField::Quote))?;
        read(quote).ok_or_else(|| self.missing(index, field))
    }

    /// Combo bid: the body's bid for a single, else body bid less wing ask.
    pub fn bid(&self) -> Result<Decimal, ComputationError> {
        let body_bid = self.field(self.spread.body, QuoteField::Bid, |q| q.bid)?;
        if !self.spread.is_spread() {
            return Ok(body_bid);
        }
        let wing_ask = self.field(self.spread.wing, QuoteField::Ask, |q| q.ask)?;
        Ok(combo_bid(body_bid, wing_ask))
    }

    /// Combo ask: the body's ask for a single, else body ask less wing bid.
    pub fn ask(&self) -> Result<Decimal, ComputationError> {
        let body_ask = self.field(self.spread.body, QuoteField::Ask, |q| q.ask)?;
        if !self.spread.is_spread() {
            return Ok(body_ask);
        }
        let wing_bid = self.field(self.spread.wing, QuoteField::Bid, |q| q.bid)?;
        Ok(combo_ask(body_ask, wing_bid))
    }

    /// Midpoint rounded half-down to `scale` places.
    pub fn midpoint(&self, scale: u32) -> Result<Decimal, ComputationError> {
        Ok(midpoint(self.bid()?, self.ask()?, scale))
    }

    /// Greeks summed across legs, long legs added and short legs subtracted.
    pub fn greeks(&self) -> Result<Greeks, ComputationError> {
        self.net_greeks(QuoteField::Delta)
    }

    /// Net side-signed delta.
    pub fn delta(&self) -> Result<Decimal, ComputationError> {
        Ok(self.net_greeks(QuoteField::Delta)?.delta)
    }

    /// Net side-signed gamma.
    pub fn gamma(&self) -> Result<Decimal, ComputationError> {
        Ok(self.net_greeks(QuoteField::Gamma)?.gamma)
    }

    /// Delta, gamma and midpoint for the projection.
    pub fn projection_inputs(&self, scale: u32) -> Result<ProjectionInputs, ComputationError> {
        Ok(ProjectionInputs {
            delta: self.delta()?,
            gamma: self.gamma()?,
            midpoint: self.midpoint(scale)?,
        })
    }

    // Missing greeks are reported as `field`, the one the caller needs.
    fn net_greeks(&self, field: QuoteField) -> Result<Greeks, ComputationError> {
        self.spread
            .legs
            .iter()
            .enumerate()
            .try_fold(Greeks::ZERO, |net, (i, leg)| {
                let greeks = self.field(i, field, |q| q.greeks)?;
                Ok(net + greeks.scale(Decimal::from(leg.side().sign())))
            })
    }
}

/// Closing and opening halves of a calendar roll.
#[derive(Debug, Clone, Copy)]
pub struct SpreadRoll<'a> {
    spread: &'a Spread,
}

impl SpreadRoll<'_> {
    /// Legs at the nearest expiration, as a vertical.
    pub fn closing_spread(&self) -> Result<Spread, StructuralError> {
        self.half(self.spread.min_expiration)
    }

    /// Legs at the furthest expiration, as a vertical.
    pub fn opening_spread(&self) -> Result<Spread, StructuralError> {
        self.half(self.spread.max_expiration)
    }

    fn half(&self, expiration: NaiveDate) -> Result<Spread, StructuralError> {
        let legs = self
            .spread
            .legs
            .select(|l| l.expiration() == Some(expiration));
        self.spread.classifier.classify_as(SpreadVariant::Vertical, &legs)
    }
}

/// Serializable description of a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadSummary {
    /// Structural variant.
    pub variant: SpreadVariant,
    /// Underlying root.
    pub underlying: String,
    /// Put or call.
    pub right: OptionRight,
    /// Body strike.
    pub strike: Decimal,
    /// Wing strike.
    pub wing_strike: Decimal,
    /// Shared expiration, when there is one.
    pub expiration: Option<NaiveDate>,
    /// Nearest expiration.
    pub min_expiration: NaiveDate,
    /// Furthest expiration.
    pub max_expiration: NaiveDate,
    /// Body side.
    pub side: PositionSide,
    /// Body direction.
    pub direction: Direction,
    /// Leg symbols in order.
    pub legs: Vec<Symbol>,
    /// Body fills.
    pub filled_quantity: u32,
    /// Order limit price.
    pub limit_price: Option<Decimal>,
    /// Combo bid.
    pub bid: Option<Decimal>,
    /// Combo ask.
    pub ask: Option<Decimal>,
    /// Rounded midpoint.
    pub midpoint: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spread::services::classify;
    use rust_decimal_macros::dec;

    fn quoted(osi: &str, side: PositionSide, bid: Decimal, ask: Decimal, delta: Decimal, gamma: Decimal) -> Leg {
        Leg::from_osi(osi, side, Direction::Opening).unwrap().with_quote(
            OptionQuote::new(osi)
                .with_bid_ask(bid, ask)
                .with_greeks(Greeks::with_delta_gamma(delta, gamma)),
        )
    }

    fn put_vertical() -> Spread {
        let legs = LegSet::new(vec![
            quoted(
                "SPY   250117P00450000",
                PositionSide::Short,
                dec!(3.00),
                dec!(3.20),
                dec!(-0.60),
                dec!(0.10),
            )
            .with_filled_quantity(4),
            quoted(
                "SPY   250117P00445000",
                PositionSide::Long,
                dec!(1.00),
                dec!(1.20),
                dec!(-0.10),
                dec!(0.06),
            )
            .with_filled_quantity(4),
        ])
        .with_limit_price(dec!(8.00));
        classify(&legs).unwrap()
    }

    #[test]
    fn vertical_prices() {
        let spread = put_vertical();
        assert_eq!(spread.bid().unwrap(), dec!(1.80));
        assert_eq!(spread.ask().unwrap(), dec!(2.20));
        assert_eq!(spread.midpoint().unwrap(), dec!(2.00));
    }

    #[test]
    fn net_greeks_are_side_signed() {
        let spread = put_vertical();
        assert_eq!(spread.delta().unwrap(), dec!(0.50));
        assert_eq!(spread.gamma().unwrap(), dec!(-0.04));

        let net = spread.greeks().unwrap();
        assert_eq!(net.delta, dec!(0.50));
        assert_eq!(net.gamma, dec!(-0.04));
    }

    #[test]
    fn facade_fields_follow_body() {
        let spread = put_vertical();
        assert_eq!(spread.right(), OptionRight::Put);
        assert_eq!(spread.side(), PositionSide::Short);
        assert!(spread.is_short());
        assert!(spread.is_opening());
        assert_eq!(spread.expiration(), NaiveDate::from_ymd_opt(2025, 1, 17));
        assert_eq!(spread.min_expiration(), spread.max_expiration());
        assert_eq!(spread.underlying(), "SPY");
    }

    #[test]
    fn unit_price_divides_by_fills() {
        assert_eq!(put_vertical().unit_price().unwrap(), dec!(2.00));
    }

    #[test]
    fn unit_price_errors() {
        let legs = LegSet::new(vec![
            Leg::from_osi("SPY   250117P00450000", PositionSide::Short, Direction::Opening).unwrap(),
        ]);
        let spread = classify(&legs).unwrap();
        assert_eq!(spread.unit_price().unwrap_err(), ComputationError::MissingLimitPrice);

        let spread = classify(&legs.clone().with_limit_price(dec!(1.50))).unwrap();
        assert_eq!(spread.unit_price().unwrap_err(), ComputationError::NoFilledQuantity);
    }

    #[test]
    fn single_uses_own_bid_ask() {
        let legs = LegSet::new(vec![quoted(
            "SPY   250117C00460000",
            PositionSide::Long,
            dec!(2.10),
            dec!(2.15),
            dec!(0.30),
            dec!(0.02),
        )]);
        let spread = classify(&legs).unwrap();
        assert_eq!(spread.bid().unwrap(), dec!(2.10));
        assert_eq!(spread.ask().unwrap(), dec!(2.15));
        assert_eq!(spread.midpoint().unwrap(), dec!(2.12));
        assert_eq!(spread.body_leg().symbol(), spread.wing_leg().symbol());
    }

    #[test]
    fn missing_quote_names_symbol_and_field() {
        let legs = LegSet::new(vec![
            Leg::from_osi("SPY   250117P00450000", PositionSide::Short, Direction::Opening).unwrap(),
        ]);
        let err = classify(&legs).unwrap().bid().unwrap_err();
        assert_eq!(
            err,
            ComputationError::MissingQuoteField {
                symbol: Symbol::new("SPY   250117P00450000"),
                field: QuoteField::Quote,
            }
        );
    }

    #[test]
    fn missing_greeks_block_projection() {
        let leg = Leg::from_osi("SPY   250117P00450000", PositionSide::Short, Direction::Opening)
            .unwrap()
            .with_quote(OptionQuote::new("SPY   250117P00450000").with_bid_ask(dec!(1), dec!(2)));
        let spread = classify(&LegSet::new(vec![leg])).unwrap();
        let err = spread.project_price_at(dec!(450), dec!(449), false).unwrap_err();
        assert!(matches!(
            err,
            ComputationError::MissingQuoteField {
                field: QuoteField::Delta,
                ..
            }
        ));
    }

    #[test]
    fn projection_worked_examples() {
        let spread = put_vertical();
        assert_eq!(spread.project_price_at(dec!(422.10), dec!(422.0), false).unwrap(), dec!(2.05));
        assert_eq!(spread.project_price_at(dec!(425.90), dec!(422.0), true).unwrap(), dec!(4.32556));
        assert_eq!(spread.project_price_at(dec!(422.0), dec!(422.0), false).unwrap(), dec!(2.00));
    }

    #[test]
    fn summary_serializes() {
        let summary = put_vertical().summary();
        assert_eq!(summary.variant, SpreadVariant::Vertical);
        assert_eq!(summary.midpoint, Some(dec!(2.00)));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["variant"], "vertical");
        assert_eq!(json["right"], "PUT");
        assert_eq!(json["side"], "short");
        assert_eq!(json["legs"][1], "SPY   250117P00445000");
    }

    #[test]
    fn classifier_scale_drives_midpoint_summary_and_projection() {
        let legs = LegSet::new(vec![
            quoted(
                "SPY   250117P00450000",
                PositionSide::Short,
                dec!(3.013),
                dec!(3.20),
                dec!(-0.60),
                dec!(0.10),
            ),
            quoted(
                "SPY   250117P00445000",
                PositionSide::Long,
                dec!(1.00),
                dec!(1.20),
                dec!(-0.10),
                dec!(0.06),
            ),
        ]);
        let params = ProjectionParams {
            midpoint_scale: 3,
            ..ProjectionParams::default()
        };
        let spread = Classifier::default().with_params(params).classify(&legs).unwrap();

        assert_eq!(spread.params(), params);
        assert_eq!(spread.midpoint().unwrap(), dec!(2.006));
        assert_eq!(spread.summary().midpoint, Some(dec!(2.006)));
        assert_eq!(spread.project_price_at(dec!(422), dec!(422), false).unwrap(), dec!(2.006));

        assert_eq!(classify(&legs).unwrap().midpoint().unwrap(), dec!(2.01));
    }

    #[test]
    fn roll_only_for_calendar_roll() {
        assert!(put_vertical().roll().is_none());
    }
}
