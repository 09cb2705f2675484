use serde::{Deserialize, Serialize};

use crate::{
    engine::{Metrics, evaluate},
    inputs::{
        DesignInputs, INSULATION_RANGE, ORIENTATION_RANGE, PV_COVERAGE_RANGE, WINDOW_RATIO_RANGE,
    },
    profile::Profile,
};

/// Design factor varied by `croft sweep`, stepping at the original widget
/// granularity while everything else stays at the base design.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, clap::ValueEnum, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParameter {
    #[display("insulation (mm)")]
    Insulation,

    #[display("window-to-wall ratio")]
    WindowRatio,

    #[display("PV coverage")]
    PvCoverage,

    #[display("orientation (°)")]
    Orientation,
}

impl SweepParameter {
    fn values(self) -> Vec<f64> {
        match self {
            Self::Insulation => INSULATION_RANGE.step_by(10).map(f64::from).collect(),
            Self::WindowRatio => float_steps(WINDOW_RATIO_RANGE.into_inner(), 0.05),
            Self::PvCoverage => float_steps(PV_COVERAGE_RANGE.into_inner(), 0.05),
            Self::Orientation => ORIENTATION_RANGE.step_by(5).map(f64::from).collect(),
        }
    }

    fn apply(self, base: &DesignInputs, value: f64) -> DesignInputs {
        let mut inputs = *base;
        match self {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::Insulation => inputs.insulation_mm = value as u32,
            Self::WindowRatio => inputs.window_ratio = value,
            Self::PvCoverage => inputs.pv_coverage = value,
            #[allow(clippy::cast_possible_truncation)]
            Self::Orientation => inputs.orientation_deg = value as i32,
        }
        inputs
    }
}

fn float_steps((start, end): (f64, f64), step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut value = start;
    while value <= end + step / 2.0 {
        values.push(value.min(end));
        value += step;
    }
    values
}

/// Evaluate the base design once per step of the swept parameter.
pub fn sweep(
    base: &DesignInputs,
    parameter: SweepParameter,
    profile: Profile,
) -> Vec<(f64, Metrics)> {
    parameter
        .values()
        .into_iter()
        .map(|value| (value, evaluate(&parameter.apply(base, value), profile)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insulation_sweep_is_monotone() {
        let rows = sweep(&DesignInputs::default(), SweepParameter::Insulation, Profile::Pioneer);
        assert_eq!(rows.len(), 16);
        assert!(
            rows.windows(2).all(|pair| pair[1].1.design_eui <= pair[0].1.design_eui),
            "thicker insulation must never raise the design EUI",
        );
    }

    #[test]
    fn test_sweep_values_stay_in_range() {
        for parameter in
            [SweepParameter::WindowRatio, SweepParameter::PvCoverage, SweepParameter::Orientation]
        {
            for (value, _) in sweep(&DesignInputs::default(), parameter, Profile::Pioneer) {
                let probe = parameter.apply(&DesignInputs::default(), value);
                probe.validate().unwrap();
            }
        }
    }
}
