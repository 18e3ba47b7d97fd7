//! Spread price projection from delta and gamma.
//!
//! Estimates a spread's midpoint at a hypothetical underlying price by
//! walking the displacement one whole dollar at a time:
//!
//! 1. Start from `|delta|` and `|gamma|`.
//! 2. For each whole dollar, moving out of the money adds gamma to delta and
//!    grows gamma by `gamma_growth`; moving in subtracts gamma and shrinks it
//!    by `gamma_decay`. The updated delta is accumulated.
//! 3. The leftover fraction contributes `delta × fraction`.
//! 4. The total is negated unless the move is out of the money, then added
//!    to the midpoint.
//!
//! This is a heuristic, not a Taylor expansion. Large inward moves can push
//! delta through zero and invert the adjustment; that arithmetic is kept
//! as-is rather than clamped.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::moneyness::MIDPOINT_SCALE;
use crate::domain::spread::errors::ComputationError;

/// Default cap on whole-dollar steps walked by one projection.
pub const MAX_PROJECTION_STEPS: u64 = 100_000;

/// Tunable factors of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Gamma multiplier per dollar moved out of the money.
    pub gamma_growth: Decimal,
    /// Gamma multiplier per dollar moved into the money.
    pub gamma_decay: Decimal,
    /// Decimal places of the midpoint the projection starts from.
    pub midpoint_scale: u32,
    /// Largest whole-dollar displacement walked before giving up.
    pub max_steps: u64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            gamma_growth: dec!(1.10),
            gamma_decay: dec!(0.90),
            midpoint_scale: MIDPOINT_SCALE,
            max_steps: MAX_PROJECTION_STEPS,
        }
    }
}

/// Quote-derived inputs, read once per projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionInputs {
    /// Net spread delta (sign ignored).
    pub delta: Decimal,
    /// Net spread gamma (sign ignored).
    pub gamma: Decimal,
    /// Current spread midpoint.
    pub midpoint: Decimal,
}

/// State before the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionStart {
    /// Signed displacement.
    pub difference: Decimal,
    /// `|delta|`.
    pub spread_delta: Decimal,
    /// `|gamma|`.
    pub spread_gamma: Decimal,
    /// Whole dollars to walk.
    pub integral: Decimal,
    /// Leftover fraction of a dollar.
    pub mantissa: Decimal,
}

/// State after one whole-dollar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionStep {
    /// 1-based step number.
    pub step: u64,
    /// Delta after this step.
    pub spread_delta: Decimal,
    /// Gamma after this step.
    pub spread_gamma: Decimal,
    /// Accumulated adjustment so far (unsigned).
    pub total: Decimal,
}

/// Final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOutcome {
    /// Signed adjustment applied to the midpoint.
    pub total: Decimal,
    /// Starting midpoint.
    pub midpoint: Decimal,
    /// Projected price.
    pub price: Decimal,
}

/// Observer of projection progress.
pub trait ProjectionTrace {
    /// Called once before stepping.
    fn start(&mut self, _start: &ProjectionStart) {}

    /// Called after each whole-dollar step.
    fn step(&mut self, _step: &ProjectionStep) {}

    /// Called once with the result.
    fn finish(&mut self, _outcome: &ProjectionOutcome) {}
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl ProjectionTrace for NoTrace {}

/// Emits progress as `tracing` debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl ProjectionTrace for TracingTrace {
    fn start(&mut self, start: &ProjectionStart) {
        tracing::debug!(
            difference = %start.difference,
            delta = %start.spread_delta,
            gamma = %start.spread_gamma,
            integral = %start.integral,
            mantissa = %start.mantissa,
            "projection start"
        );
    }

    fn step(&mut self, step: &ProjectionStep) {
        tracing::debug!(
            step = step.step,
            delta = %step.spread_delta,
            gamma = %step.spread_gamma,
            total = %step.total,
            "projection step"
        );
    }

    fn finish(&mut self, outcome: &ProjectionOutcome) {
        tracing::debug!(
            total = %outcome.total,
            mid = %outcome.midpoint,
            sum = %outcome.price,
            "projection finish"
        );
    }
}

/// Project a price for a signed `difference` (positive = moving out of the
/// money).
pub fn project(
    inputs: &ProjectionInputs,
    difference: Decimal,
    params: &ProjectionParams,
    trace: &mut dyn ProjectionTrace,
) -> Result<Decimal, ComputationError> {
    // Floor and modulo on the absolute value keep integral and mantissa the
    // same sign.
    let distance = difference.abs();
    let integral = distance.trunc();
    let mantissa = distance - integral;
    let moving_out = difference > Decimal::ZERO;
    if integral > Decimal::from(params.max_steps) {
        return Err(ComputationError::StepLimit {
            integral,
            max_steps: params.max_steps,
        });
    }

    let mut spread_delta = inputs.delta.abs();
    let mut spread_gamma = inputs.gamma.abs();
    let mut total = Decimal::ZERO;

    trace.start(&ProjectionStart {
        difference,
        spread_delta,
        spread_gamma,
        integral,
        mantissa,
    });

    let mut remaining = integral;
    let mut step: u64 = 0;
    while remaining > Decimal::ZERO {
        let overflow = ComputationError::Overflow { steps: step };
        if moving_out {
            spread_delta = spread_delta.checked_add(spread_gamma).ok_or(overflow.clone())?;
            spread_gamma = spread_gamma
                .checked_mul(params.gamma_growth)
                .ok_or(overflow.clone())?;
        } else {
            spread_delta = spread_delta.checked_sub(spread_gamma).ok_or(overflow.clone())?;
            spread_gamma = spread_gamma
                .checked_mul(params.gamma_decay)
                .ok_or(overflow.clone())?;
        }
        total = total.checked_add(spread_delta).ok_or(overflow)?;

        step += 1;
        remaining -= Decimal::ONE;
        trace.step(&ProjectionStep {
            step,
            spread_delta,
            spread_gamma,
            total,
        });
    }

    let overflow = ComputationError::Overflow { steps: step };
    let fraction = spread_delta.checked_mul(mantissa).ok_or(overflow.clone())?;
    total = total.checked_add(fraction).ok_or(overflow.clone())?;

    if !moving_out {
        total = -total;
    }

    let price = inputs.midpoint.checked_add(total).ok_or(overflow)?;
    trace.finish(&ProjectionOutcome {
        total,
        midpoint: inputs.midpoint,
        price,
    });

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(delta: Decimal, gamma: Decimal, midpoint: Decimal) -> ProjectionInputs {
        ProjectionInputs {
            delta,
            gamma,
            midpoint,
        }
    }

    fn run(inputs: &ProjectionInputs, difference: Decimal) -> Decimal {
        project(inputs, difference, &ProjectionParams::default(), &mut NoTrace).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        start: Option<ProjectionStart>,
        steps: Vec<ProjectionStep>,
        outcome: Option<ProjectionOutcome>,
    }

    impl ProjectionTrace for Recorder {
        fn start(&mut self, start: &ProjectionStart) {
            self.start = Some(*start);
        }

        fn step(&mut self, step: &ProjectionStep) {
            self.steps.push(*step);
        }

        fn finish(&mut self, outcome: &ProjectionOutcome) {
            self.outcome = Some(*outcome);
        }
    }

    #[test]
    fn fractional_move_out() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        assert_eq!(run(&i, dec!(0.10)), dec!(2.05));
    }

    #[test]
    fn fractional_move_in() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        assert_eq!(run(&i, dec!(-0.10)), dec!(1.95));
        assert_eq!(run(&i, dec!(-0.90)), dec!(1.55));
    }

    #[test]
    fn multi_dollar_move_out_compounds_gamma() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        // 0.54 + 0.584 + 0.6324 + 0.6324 × 0.90
        let price = run(&i, dec!(3.90));
        assert_eq!(price, dec!(4.32556));
        assert!((price - dec!(4.33)).abs() <= dec!(0.005));
    }

    #[test]
    fn multi_dollar_move_in_decays_gamma() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        // -(0.46 + 0.424 + 0.3916 + 0.3916 × 0.90)
        let price = run(&i, dec!(-3.90));
        assert_eq!(price, dec!(0.37196));
        assert!((price - dec!(0.37)).abs() <= dec!(0.005));
    }

    #[test]
    fn negative_greeks_use_absolute_values() {
        let short = inputs(dec!(-0.50), dec!(-0.04), dec!(2.0));
        assert_eq!(run(&short, dec!(3.90)), dec!(4.32556));
    }

    #[test]
    fn deep_inward_move_inverts_delta_without_clamping() {
        let i = inputs(dec!(0.10), dec!(0.05), dec!(1.00));
        // delta walks 0.05, 0.005, -0.0355, -0.07195, -0.104755
        assert_eq!(run(&i, dec!(-5)), dec!(1.157205));
    }

    #[test]
    fn trace_sees_every_step() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        let mut recorder = Recorder::default();
        let price = project(&i, dec!(3.90), &ProjectionParams::default(), &mut recorder).unwrap();

        let start = recorder.start.unwrap();
        assert_eq!(start.integral, dec!(3));
        assert_eq!(start.mantissa, dec!(0.90));

        assert_eq!(recorder.steps.len(), 3);
        assert_eq!(recorder.steps[0].spread_delta, dec!(0.54));
        assert_eq!(recorder.steps[0].spread_gamma, dec!(0.044));
        assert_eq!(recorder.steps[2].total, dec!(1.7564));

        let outcome = recorder.outcome.unwrap();
        assert_eq!(outcome.price, price);
        assert_eq!(outcome.total, dec!(2.32556));
    }

    #[test]
    fn custom_factors_change_the_walk() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        let flat = ProjectionParams {
            gamma_growth: Decimal::ONE,
            gamma_decay: Decimal::ONE,
            ..ProjectionParams::default()
        };
        // 0.54 + 0.58
        let price = project(&i, dec!(2), &flat, &mut NoTrace).unwrap();
        assert_eq!(price, dec!(3.12));
    }

    #[test]
    fn overflow_is_an_error() {
        let i = inputs(Decimal::ONE, Decimal::MAX / Decimal::TWO, Decimal::ZERO);
        let err = project(&i, dec!(5), &ProjectionParams::default(), &mut NoTrace).unwrap_err();
        assert_eq!(err, ComputationError::Overflow { steps: 1 });
    }

    #[test]
    fn displacement_beyond_step_cap_is_rejected() {
        let flat = inputs(Decimal::ZERO, Decimal::ZERO, dec!(1.00));
        let mut recorder = Recorder::default();
        let far = Decimal::from(1_000_000_000_000_i64);
        let err = project(&flat, far, &ProjectionParams::default(), &mut recorder).unwrap_err();
        assert_eq!(
            err,
            ComputationError::StepLimit {
                integral: far,
                max_steps: MAX_PROJECTION_STEPS,
            }
        );
        assert!(recorder.start.is_none());
    }

    #[test]
    fn displacement_at_step_cap_still_walks() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        let capped = ProjectionParams {
            max_steps: 3,
            ..ProjectionParams::default()
        };
        let price = project(&i, dec!(3.90), &capped, &mut NoTrace).unwrap();
        assert_eq!(price, dec!(4.32556));

        let err = project(&i, dec!(-4), &capped, &mut NoTrace).unwrap_err();
        assert!(matches!(err, ComputationError::StepLimit { max_steps: 3, .. }));
    }

    #[test]
    fn tracing_trace_does_not_change_result() {
        let i = inputs(dec!(0.50), dec!(0.04), dec!(2.0));
        let traced = project(&i, dec!(3.90), &ProjectionParams::default(), &mut TracingTrace).unwrap();
        assert_eq!(traced, run(&i, dec!(3.90)));
    }

    proptest! {
        #[test]
        fn zero_displacement_returns_midpoint(
            delta in -100_000i64..100_000,
            gamma in -10_000i64..10_000,
            mid in -100_000i64..100_000,
        ) {
            let i = inputs(Decimal::new(delta, 4), Decimal::new(gamma, 4), Decimal::new(mid, 2));
            prop_assert_eq!(run(&i, Decimal::ZERO), i.midpoint);
        }

        #[test]
        fn sub_dollar_moves_are_linear_in_delta(
            delta in 0i64..10_000,
            cents in 1i64..100,
        ) {
            let i = inputs(Decimal::new(delta, 4), dec!(0.05), dec!(1.00));
            let difference = Decimal::new(cents, 2);
            prop_assert_eq!(run(&i, difference), dec!(1.00) + i.delta * difference);
            prop_assert_eq!(run(&i, -difference), dec!(1.00) - i.delta * difference);
        }
    }
}
