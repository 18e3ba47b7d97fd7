//! Observability module for logging.
//!
//! This module installs structured `tracing` output for the spread engine.

mod logging;

pub use logging::{LogFormat, LoggingError, build_filter, init_logging};
