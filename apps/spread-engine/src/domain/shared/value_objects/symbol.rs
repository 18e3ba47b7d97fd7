//! Symbol value object for instrument identifiers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::OptionRight;
use crate::domain::shared::SymbolError;

/// Length of the fixed OSI suffix: `YYMMDD` + `C|P` + 8 strike digits.
const OSI_SUFFIX_LEN: usize = 15;
/// Maximum OSI root length (padded with spaces in the canonical form).
const OSI_ROOT_MAX: usize = 6;

/// A trading symbol (ticker or OSI option symbol).
///
/// Examples:
/// - Equity: "SPY", "AAPL"
/// - Option: "SPY   250117P00450000" or "SPY250117P00450000"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

/// Components of a parsed OSI option symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsiComponents {
    /// Underlying root ("SPY").
    pub root: String,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
}

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this looks like an OSI option symbol.
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.parse_osi().is_ok()
    }

    /// Extract the underlying root from an option symbol.
    ///
    /// Returns the full symbol if it's not an option.
    #[must_use]
    pub fn underlying(&self) -> Self {
        self.parse_osi()
            .map_or_else(|_| self.clone(), |osi| Self(osi.root))
    }

    /// Parse the OSI layout: `{ROOT}{YYMMDD}{C|P}{STRIKE×1000, 8 digits}`.
    ///
    /// The root may be padded with spaces to six characters or left unpadded.
    pub fn parse_osi(&self) -> Result<OsiComponents, SymbolError> {
        let s = self.0.as_str();
        let len = s.len();
        if !s.is_ascii() || len <= OSI_SUFFIX_LEN || len > OSI_SUFFIX_LEN + OSI_ROOT_MAX {
            return Err(SymbolError::InvalidLength {
                symbol: self.0.clone(),
                length: len,
            });
        }

        let invalid = |field| SymbolError::InvalidField {
            symbol: self.0.clone(),
            field,
        };

        let (root, suffix) = s.split_at(len - OSI_SUFFIX_LEN);
        let root = root.trim_end();
        if root.is_empty() || !root.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("root"));
        }

        let (date, rest) = suffix.split_at(6);
        let (right, strike) = rest.split_at(1);

        let expiration = NaiveDate::parse_from_str(date, "%y%m%d").map_err(|_| invalid("expiration"))?;
        let right = match right {
            "C" => OptionRight::Call,
            "P" => OptionRight::Put,
            _ => return Err(invalid("right")),
        };
        if !strike.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("strike"));
        }
        let mills: i64 = strike.parse().map_err(|_| invalid("strike"))?;

        Ok(OsiComponents {
            root: root.to_string(),
            expiration,
            right,
            strike: Decimal::new(mills, 3).normalize(),
        })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn symbol_new_normalizes_case() {
        let s = Symbol::new("spy");
        assert_eq!(s.as_str(), "SPY");
    }

    #[test]
    fn parse_padded_osi() {
        let osi = Symbol::new("SPY   250117P00450000").parse_osi().unwrap();
        assert_eq!(osi.root, "SPY");
        assert_eq!(osi.expiration, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
        assert_eq!(osi.right, OptionRight::Put);
        assert_eq!(osi.strike, dec!(450));
    }

    #[test]
    fn parse_unpadded_osi_with_fractional_strike() {
        let osi = Symbol::new("AAPL250221C00187500").parse_osi().unwrap();
        assert_eq!(osi.root, "AAPL");
        assert_eq!(osi.right, OptionRight::Call);
        assert_eq!(osi.strike, dec!(187.5));
    }

    #[test]
    fn parse_rejects_equity() {
        let err = Symbol::new("SPY").parse_osi().unwrap_err();
        assert!(matches!(err, SymbolError::InvalidLength { length: 3, .. }));
        assert!(!Symbol::new("SPY").is_option());
    }

    #[test]
    fn parse_rejects_bad_fields() {
        let err = Symbol::new("SPY   251317P00450000").parse_osi().unwrap_err();
        assert_eq!(
            err,
            SymbolError::InvalidField {
                symbol: "SPY   251317P00450000".to_string(),
                field: "expiration",
            }
        );

        let err = Symbol::new("SPY   250117X00450000").parse_osi().unwrap_err();
        assert!(matches!(err, SymbolError::InvalidField { field: "right", .. }));

        let err = Symbol::new("SPY   250117P0045000A").parse_osi().unwrap_err();
        assert!(matches!(err, SymbolError::InvalidField { field: "strike", .. }));
    }

    #[test]
    fn underlying_from_option_and_equity() {
        assert_eq!(Symbol::new("SPY   250117P00450000").underlying().as_str(), "SPY");
        assert_eq!(Symbol::new("GOOGL250221C00150000").underlying().as_str(), "GOOGL");
        assert_eq!(Symbol::new("AAPL").underlying().as_str(), "AAPL");
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("SPY   250117P00450000");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"SPY   250117P00450000\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
