use serde::Serialize;

use crate::{
    engine::Metrics,
    profile::{Profile, TechAxis},
};

const CARBON_SLOPE: f64 = 250.0;
const ENERGY_SLOPE: f64 = 1.3;
const ROI_INTERCEPT: f64 = 150.0;
const ROI_SLOPE: f64 = 10.0;
const SPACE_PIVOT: f64 = 0.6;
const SPACE_SLOPE: f64 = 300.0;
const COMFORT_SLOPE: f64 = 20.0;
const PV_SHARE_SLOPE: f64 = 200.0;

/// Six-axis score vector behind the radar chart. Each axis is independently
/// clamped to the profile's `[floor, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Scores {
    pub carbon: f64,
    pub energy: f64,
    pub tech: f64,
    pub roi: f64,
    pub space: f64,
    pub comfort: f64,

    #[serde(skip)]
    tech_label: &'static str,
}

impl Scores {
    pub const fn axes(&self) -> [(&'static str, f64); 6] {
        [
            ("Carbon reduction", self.carbon),
            ("Net energy", self.energy),
            (self.tech_label, self.tech),
            ("Return on investment", self.roi),
            ("Space efficiency", self.space),
            ("Thermal comfort", self.comfort),
        ]
    }
}

#[must_use]
pub fn score(metrics: &Metrics, profile: Profile) -> Scores {
    let constants = profile.constants();

    let (tech_label, tech) = match constants.tech_axis {
        TechAxis::Industrialization(fixed) => ("Industrialization", fixed),
        TechAxis::PvShare => {
            let annual_demand = metrics.design_eui * metrics.floor_area;
            let share = metrics.pv_generation.0 / annual_demand.0;
            ("PV share", (share * PV_SHARE_SLOPE).clamp(0.0, 100.0))
        }
    };

    Scores {
        carbon: (metrics.carbon_reduction() * CARBON_SLOPE)
            .clamp(constants.carbon_score_floor, 100.0),
        energy: ((metrics.baseline_eui - metrics.net_eui).0 * ENERGY_SLOPE)
            .clamp(constants.energy_score_floor, 100.0),
        tech,
        roi: (ROI_INTERCEPT - metrics.payback.0 * ROI_SLOPE).clamp(constants.roi_score_floor, 100.0),
        space: ((SPACE_PIVOT - metrics.shape_coefficient) * SPACE_SLOPE)
            .clamp(constants.space_score_floor, 100.0),
        comfort: (100.0 - metrics.pmv.abs() * COMFORT_SLOPE)
            .clamp(constants.comfort_score_floor, 100.0),
        tech_label,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{engine::evaluate, inputs::DesignInputs};

    #[test]
    fn test_first_release_defaults() {
        let metrics = evaluate(&DesignInputs::default(), Profile::Pioneer);
        let scores = score(&metrics, Profile::Pioneer);
        // More than a 40% carbon cut saturates the carbon axis.
        assert_abs_diff_eq!(scores.carbon, 100.0);
        assert_abs_diff_eq!(scores.energy, 100.0);
        assert_abs_diff_eq!(scores.tech, 95.0);
        // A 31-year payback bottoms out at the ROI floor.
        assert_abs_diff_eq!(scores.roi, 50.0);
        assert_abs_diff_eq!(scores.space, (0.6 - 2.0 * 23.0 / 130.0) * 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(scores.comfort, 95.0);
    }

    #[test]
    fn test_axes_are_clamped() {
        let metrics = evaluate(
            &DesignInputs::builder().insulation_mm(50).window_ratio(0.8).pv_coverage(0.0).build(),
            Profile::Pioneer,
        );
        let scores = score(&metrics, Profile::Pioneer);
        for (_, value) in scores.axes() {
            assert!((0.0..=100.0).contains(&value), "axis out of range: {value}");
        }
        assert_abs_diff_eq!(scores.energy, 60.0);
        assert_abs_diff_eq!(scores.comfort, 78.0);
    }

    #[test]
    fn test_regional_pv_share_axis() {
        let metrics = evaluate(&DesignInputs::default(), Profile::Regional);
        let scores = score(&metrics, Profile::Regional);
        let expected = metrics.pv_generation.0 / (metrics.design_eui.0 * metrics.floor_area.0);
        assert_abs_diff_eq!(scores.tech, (expected * 200.0).clamp(0.0, 100.0));
        assert_eq!(scores.axes()[2].0, "PV share");
    }
}
