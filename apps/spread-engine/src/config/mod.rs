//! Configuration module for the spread engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for classification, pricing and projection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spread_engine::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Build domain services from it
//! let classifier = config.classifier();
//! let params = config.projection_params();
//! ```

mod classification;
mod observability;
mod pricing;
mod projection;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classification::ClassificationConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use pricing::PricingConfig;
pub use projection::ProjectionConfig;

use crate::domain::spread::{Classifier, ProjectionParams};
use crate::observability::build_filter;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Price projection factors.
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Midpoint rounding.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Classifier settings.
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Projection parameters from the projection and pricing sections.
    #[must_use]
    pub const fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            gamma_growth: self.projection.gamma_growth,
            gamma_decay: self.projection.gamma_decay,
            midpoint_scale: self.pricing.midpoint_scale,
            max_steps: self.projection.max_steps,
        }
    }

    /// Classifier with the configured side policy and pricing.
    ///
    /// Spreads it builds round midpoints and project prices with
    /// [`Config::projection_params`].
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.classification.side_policy).with_params(self.projection_params())
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let projection = &config.projection;
    if projection.gamma_growth < Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "projection.gamma_growth must be at least 1".to_string(),
        ));
    }

    if projection.gamma_decay <= Decimal::ZERO || projection.gamma_decay >= Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "projection.gamma_decay must be between 0 and 1 (exclusive)".to_string(),
        ));
    }

    if projection.max_steps == 0 {
        return Err(ConfigError::ValidationError(
            "projection.max_steps must be positive".to_string(),
        ));
    }

    if config.pricing.midpoint_scale > MAX_DECIMAL_SCALE {
        return Err(ConfigError::ValidationError(format!(
            "pricing.midpoint_scale must be at most {MAX_DECIMAL_SCALE}"
        )));
    }

    let logging = &config.observability.logging;
    // A bare directive with no target must name a level; `EnvFilter` would
    // otherwise read a typo as a target.
    let bare_levels_ok = logging
        .level
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty() && !directive.contains('='))
        .all(|directive| LOG_LEVELS.contains(&directive.to_lowercase().as_str()));
    if !bare_levels_ok {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of {LOG_LEVELS:?} or a target=level directive"
        )));
    }
    build_filter(logging)
        .map_err(|e| ConfigError::ValidationError(format!("observability.logging.level: {e}")))?;

    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
