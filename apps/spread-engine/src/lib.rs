// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::items_after_statements
    )
)]

//! Spread Engine - Rust Core Library
//!
//! Options spread classification and price projection for the Cream
//! trading system.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: OSI symbols, option rights
//!   - `quote`: Quote snapshots and shared handles
//!   - `spread`: Legs, classification, body/wing moneyness, price projection
//!   - `chain`: Option chain filters and extreme selection
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`QuoteSourcePort`)
//!   - `services`: Batch classification, spread collections
//!   - `use_cases`: `ClassifySpreads`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `marketdata`: In-memory quote registry
//!
//! Cross-cutting: `config` (YAML with env interpolation) and
//! `observability` (structured logging).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::chain::{Boundary, ChainField, ChainOption, OptionChain};
pub use domain::quote::{Greeks, OptionQuote, QuoteHandle};
pub use domain::shared::{OptionRight, OsiComponents, Symbol, SymbolError};
pub use domain::spread::{
    Classifier, ComputationError, CountRule, Direction, Leg, LegAction, LegSet, Moneyness, NoTrace,
    PositionSide, ProjectionParams, ProjectionTrace, QuoteField, SidePolicy, Spread, SpreadRoll,
    SpreadSnapshot, SpreadSummary, SpreadVariant, StructuralError, TracingTrace, Violation, classify,
};

// Application re-exports
pub use application::ports::QuoteSourcePort;
pub use application::services::{ClassifiedBatch, SpreadCollection, classify_all};
pub use application::use_cases::ClassifySpreadsUseCase;

// Infrastructure re-exports
pub use infrastructure::marketdata::QuoteRegistry;

// Cross-cutting re-exports
pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use observability::init_logging;
