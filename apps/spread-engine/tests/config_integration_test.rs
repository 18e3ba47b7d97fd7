//! Integration tests for configuration loading.
//!
//! These tests load YAML from disk and check that the resulting settings
//! reach the classifier and the price projection.

use std::io::Write;

use rust_decimal_macros::dec;
use spread_engine::{
    ConfigError, Direction, Greeks, Leg, LegSet, OptionQuote, PositionSide, SidePolicy, SpreadVariant, load_config,
};
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

fn quoted(osi: &str, side: PositionSide, bid: rust_decimal::Decimal, ask: rust_decimal::Decimal) -> Leg {
    Leg::from_osi(osi, side, Direction::Opening).unwrap().with_quote(
        OptionQuote::new(osi)
            .with_bid_ask(bid, ask)
            .with_greeks(Greeks::with_delta_gamma(dec!(-0.25), dec!(0.02))),
    )
}

#[test]
fn loads_file_and_builds_classifier() {
    let file = write_config(
        r"
classification:
  side_policy: permissive
",
    );
    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.classification.side_policy, SidePolicy::Permissive);

    let set = LegSet::new(vec![
        quoted("SPY   250117P00450000", PositionSide::Long, dec!(3.00), dec!(3.20)),
        quoted("SPY   250117P00445000", PositionSide::Long, dec!(1.00), dec!(1.20)),
    ]);
    let spread = config.classifier().classify(&set).unwrap();
    assert_eq!(spread.variant(), SpreadVariant::Vertical);
}

#[test]
fn configured_factors_reach_the_projection() {
    let file = write_config(
        r#"
projection:
  gamma_growth: "1.00"
  gamma_decay: "0.50"
pricing:
  midpoint_scale: 1
"#,
    );
    let config = load_config(file.path().to_str()).unwrap();
    let params = config.projection_params();
    assert_eq!(params.gamma_growth, dec!(1.00));
    assert_eq!(params.midpoint_scale, 1);

    let set = LegSet::new(vec![quoted(
        "SPY   250117P00450000",
        PositionSide::Short,
        dec!(2.00),
        dec!(2.10),
    )]);
    let spread = config.classifier().classify(&set).unwrap();

    // midpoint 2.05 rounds half-down to 2.0; flat gamma walks 0.27, 0.29
    let price = spread
        .project_price_with(dec!(452), dec!(450), &params, &mut spread_engine::NoTrace)
        .unwrap();
    assert_eq!(price, dec!(2.56));
    assert_eq!(spread.project_price_at(dec!(452), dec!(450), false).unwrap(), dec!(2.56));
}

#[test]
fn configured_midpoint_scale_is_shared_by_midpoint_and_projection() {
    let file = write_config(
        r"
pricing:
  midpoint_scale: 3
",
    );
    let config = load_config(file.path().to_str()).unwrap();

    let set = LegSet::new(vec![
        quoted("SPY   250117P00450000", PositionSide::Short, dec!(3.013), dec!(3.20)),
        quoted("SPY   250117P00445000", PositionSide::Long, dec!(1.00), dec!(1.20)),
    ]);
    let spread = config.classifier().classify(&set).unwrap();

    let projected = spread
        .project_price_with(
            dec!(422),
            dec!(422),
            &config.projection_params(),
            &mut spread_engine::NoTrace,
        )
        .unwrap();
    assert_eq!(projected, dec!(2.006));
    assert_eq!(spread.midpoint().unwrap(), projected);
    assert_eq!(spread.summary().midpoint, Some(projected));
}

#[test]
fn configured_step_cap_stops_runaway_projection() {
    let file = write_config(
        r"
projection:
  max_steps: 10
",
    );
    let config = load_config(file.path().to_str()).unwrap();

    let set = LegSet::new(vec![quoted(
        "SPY   250117P00450000",
        PositionSide::Short,
        dec!(2.00),
        dec!(2.10),
    )]);
    let spread = config.classifier().classify(&set).unwrap();

    assert!(spread.project_price_at(dec!(460), dec!(450), false).is_ok());
    let err = spread.project_price_at(dec!(461), dec!(450), false).unwrap_err();
    assert_eq!(
        err,
        spread_engine::ComputationError::StepLimit {
            integral: dec!(11),
            max_steps: 10,
        }
    );
}

#[test]
fn env_interpolation_in_file() {
    let file = write_config(
        r"
observability:
  logging:
    level: ${SPREAD_ENGINE_IT_UNSET_LEVEL:-warn}
    format: compact
",
    );
    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.observability.logging.level, "warn");
    assert_eq!(config.observability.logging.format, "compact");
}

#[test]
fn invalid_file_is_a_validation_error() {
    let file = write_config(
        r"
projection:
  gamma_decay: 1.5
",
    );
    let err = load_config(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let file = write_config("projection: [unterminated");
    let err = load_config(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
