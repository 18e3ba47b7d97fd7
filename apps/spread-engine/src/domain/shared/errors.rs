//! Shared domain errors.

use thiserror::Error;

/// Errors raised while interpreting an OSI option symbol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// Symbol is too short or too long to be an OSI symbol.
    #[error("Invalid OSI symbol '{symbol}': expected 16-21 characters, got {length}")]
    InvalidLength {
        /// Offending symbol.
        symbol: String,
        /// Observed length.
        length: usize,
    },

    /// A fixed-position field of the symbol could not be parsed.
    #[error("Invalid OSI symbol '{symbol}': bad {field}")]
    InvalidField {
        /// Offending symbol.
        symbol: String,
        /// Field that failed to parse (root, expiration, right, strike).
        field: &'static str,
    },
}
