use serde::Serialize;

use crate::{
    inputs::DesignInputs,
    profile::Profile,
    units::{AnnualCost, AnnualEnergy, Cost, EnergyIntensity, SquareMetres, TonnesCo2, Years},
};

/// Everything the dashboards derive from one design alternative. Recomputed
/// fresh on every evaluation; nothing is cached or persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Metrics {
    pub floor_area: SquareMetres,
    /// Envelope compactness proxy, 1/m. Lower is more compact.
    pub shape_coefficient: f64,

    pub baseline_eui: EnergyIntensity,
    pub design_eui: EnergyIntensity,
    pub pv_generation: AnnualEnergy,
    pub net_eui: EnergyIntensity,

    pub baseline_operational_carbon: TonnesCo2,
    pub design_operational_carbon: TonnesCo2,
    pub baseline_material_carbon: TonnesCo2,
    pub design_material_carbon: TonnesCo2,
    pub baseline_carbon: TonnesCo2,
    pub design_carbon: TonnesCo2,
    /// Design carbon per occupant; only the regional release reports it.
    pub carbon_per_capita: Option<TonnesCo2>,

    pub baseline_cost: Cost,
    pub design_cost: Cost,
    pub incremental_cost: Cost,
    pub annual_savings: AnnualCost,
    pub payback: Years,

    /// Predicted mean vote, nominally centred at 0.
    pub pmv: f64,
}

impl Metrics {
    /// Fraction of life-cycle carbon avoided relative to the masonry baseline.
    pub fn carbon_reduction(&self) -> f64 {
        1.0 - self.design_carbon.0 / self.baseline_carbon.0
    }
}

/// Evaluate one design alternative against a release profile.
///
/// Pure and total over the declared input ranges: every step is a closed-form
/// scalar expression, and the only guarded division is the payback period.
#[must_use]
pub fn evaluate(inputs: &DesignInputs, profile: Profile) -> Metrics {
    let constants = profile.constants();
    let area = inputs.floor_area();
    let insulation = f64::from(inputs.insulation_mm);
    let shape_coefficient = 2.0 * (inputs.width.0 + inputs.depth.0) / area.0;

    let (heating_factor, solar_factor) = if constants.climate_adjusted {
        (inputs.climate_zone.heating_factor(), inputs.climate_zone.solar_factor())
    } else {
        (1.0, 1.0)
    };

    let baseline_eui = EnergyIntensity::from(constants.baseline_eui * heating_factor);

    let window_deviation = (inputs.window_ratio - constants.window_ratio_pivot).abs();
    let mut design_eui = baseline_eui.0 - insulation * constants.insulation_eui_slope
        + shape_coefficient * constants.shape_eui_slope
        + window_deviation * constants.window_eui_slope;
    if let Some(slope) = constants.orientation_eui_slope {
        design_eui += f64::from(inputs.orientation_deg).abs() * slope;
    }
    let design_eui = EnergyIntensity::from(design_eui.max(constants.min_design_eui));

    let pv_panel_area = area * (constants.roof_usable_fraction * inputs.pv_coverage);
    let pv_generation = AnnualEnergy::from(pv_panel_area.0 * constants.pv_yield * solar_factor);
    let net_eui = (design_eui - pv_generation / area).max(EnergyIntensity::ZERO);

    let operational_carbon = |eui: EnergyIntensity| {
        TonnesCo2::from((eui * area).0 * constants.grid_emission_factor * constants.life_span / 1000.0)
    };
    let baseline_operational_carbon = operational_carbon(baseline_eui);
    let design_operational_carbon = operational_carbon(net_eui);

    let baseline_material_carbon = TonnesCo2::from(area.0 * constants.baseline_material_intensity);
    let mut design_material_carbon = TonnesCo2::from(
        area.0
            * (constants.material_intensity_base + insulation * constants.material_intensity_per_mm)
            * constants.room_material_factor(inputs.room_type),
    );
    if inputs.pv_coverage > 0.0 {
        design_material_carbon += TonnesCo2::from(pv_panel_area.0 * constants.pv_material_intensity);
    }

    let baseline_carbon = baseline_operational_carbon + baseline_material_carbon;
    let design_carbon = design_operational_carbon + design_material_carbon;
    let carbon_per_capita = constants
        .per_capita_carbon
        .then(|| TonnesCo2::from(design_carbon.0 / f64::from(inputs.occupants)));

    let baseline_cost =
        Cost::from(constants.baseline_cost_fixed + area.0 * constants.baseline_cost_per_area);
    let mut design_cost = Cost::from(
        (constants.baseline_cost_fixed
            + area.0 * constants.design_cost_per_area
            + insulation * constants.insulation_cost_per_mm)
            * constants.room_cost_factor(inputs.room_type),
    );
    if inputs.pv_coverage > 0.0 {
        design_cost += Cost::from(pv_panel_area.0 * constants.pv_unit_cost);
    }

    let incremental_cost = design_cost - baseline_cost;
    let annual_savings =
        AnnualCost::from(((baseline_eui - net_eui) * area).0 * constants.electricity_price);
    let payback = if annual_savings > AnnualCost::ZERO {
        // The quote is in 万元, the savings in 元.
        incremental_cost * 10_000.0 / annual_savings
    } else {
        Years::from(constants.payback_sentinel)
    };

    let pmv = -1.5 + insulation / 200.0 + (0.5 - window_deviation);

    Metrics {
        floor_area: area,
        shape_coefficient,
        baseline_eui,
        design_eui,
        pv_generation,
        net_eui,
        baseline_operational_carbon,
        design_operational_carbon,
        baseline_material_carbon,
        design_material_carbon,
        baseline_carbon,
        design_carbon,
        carbon_per_capita,
        baseline_cost,
        design_cost,
        incremental_cost,
        annual_savings,
        payback,
        pmv,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        inputs::{ClimateZone, RoomType},
        units::Metres,
    };

    fn first_release_defaults() -> DesignInputs {
        DesignInputs::builder()
            .width(Metres::from(13.0))
            .depth(Metres::from(10.0))
            .insulation_mm(150)
            .window_ratio(0.45)
            .orientation_deg(0)
            .pv_coverage(0.5)
            .build()
    }

    #[test]
    fn test_first_release_baseline_scenario() {
        let metrics = evaluate(&first_release_defaults(), Profile::Pioneer);
        assert_abs_diff_eq!(metrics.floor_area.0, 130.0);
        assert_abs_diff_eq!(metrics.shape_coefficient, 2.0 * 23.0 / 130.0);
        assert_abs_diff_eq!(metrics.design_eui.0, 92.808, epsilon = 1e-3);
        assert_abs_diff_eq!(metrics.pv_generation.0, 4225.0);
        assert_abs_diff_eq!(metrics.net_eui.0, 60.308, epsilon = 1e-3);
    }

    #[test]
    fn test_disabled_pv_means_no_generation() {
        let inputs = DesignInputs::builder().pv_coverage(0.0).build();
        let metrics = evaluate(&inputs, Profile::Pioneer);
        assert_eq!(metrics.pv_generation, AnnualEnergy::ZERO);
        assert_eq!(metrics.net_eui, metrics.design_eui);
    }

    #[test]
    fn test_pmv_at_extremes() {
        let inputs = DesignInputs::builder().insulation_mm(50).window_ratio(0.8).build();
        let metrics = evaluate(&inputs, Profile::Pioneer);
        assert_abs_diff_eq!(metrics.pmv, -1.10, epsilon = 1e-12);
    }

    #[test]
    fn test_design_eui_floor_and_net_eui_bounds() {
        for insulation_mm in (50..=200).step_by(10) {
            for pv_step in 0..=6 {
                let inputs = DesignInputs::builder()
                    .insulation_mm(insulation_mm)
                    .pv_coverage(if pv_step == 0 { 0.0 } else { 0.2 + 0.1 * f64::from(pv_step - 1) })
                    .build();
                let metrics = evaluate(&inputs, Profile::Pioneer);
                assert!(metrics.design_eui.0 >= 45.0);
                assert!(metrics.net_eui >= EnergyIntensity::ZERO);
            }
        }
    }

    #[test]
    fn test_insulation_monotonically_lowers_design_eui() {
        let mut previous = f64::INFINITY;
        for insulation_mm in (50..=200).step_by(10) {
            let inputs = DesignInputs::builder().insulation_mm(insulation_mm).build();
            let design_eui = evaluate(&inputs, Profile::Pioneer).design_eui.0;
            assert!(design_eui < previous || design_eui == 45.0);
            previous = design_eui;
        }
    }

    #[test]
    fn test_pv_coverage_monotonicity() {
        let mut previous_net = f64::INFINITY;
        let mut previous_generation = -1.0;
        for step in 0..=12 {
            let coverage = 0.2 + 0.05 * f64::from(step);
            let inputs = DesignInputs::builder().pv_coverage(coverage).build();
            let metrics = evaluate(&inputs, Profile::Pioneer);
            assert!(metrics.net_eui.0 < previous_net);
            assert!(metrics.pv_generation.0 > previous_generation);
            assert!(metrics.net_eui >= EnergyIntensity::ZERO);
            previous_net = metrics.net_eui.0;
            previous_generation = metrics.pv_generation.0;
        }
    }

    #[test]
    fn test_payback_sentinel_on_nonpositive_savings() {
        // Minimal insulation without PV saves nothing over the baseline once
        // the shape and window penalties eat the insulation gain.
        let inputs = DesignInputs::builder()
            .width(Metres::from(8.0))
            .depth(Metres::from(8.0))
            .insulation_mm(50)
            .window_ratio(0.8)
            .orientation_deg(45)
            .pv_coverage(0.0)
            .build();
        let metrics = evaluate(&inputs, Profile::Pioneer);
        assert!(metrics.annual_savings <= AnnualCost::ZERO);
        assert_eq!(metrics.payback, Years::from(99.0));
    }

    #[test]
    fn test_payback_is_exact_ratio() {
        let metrics = evaluate(&first_release_defaults(), Profile::Pioneer);
        assert!(metrics.annual_savings > AnnualCost::ZERO);
        assert_eq!(metrics.payback, metrics.incremental_cost * 10_000.0 / metrics.annual_savings);
    }

    #[test]
    fn test_idempotence() {
        let inputs = first_release_defaults();
        assert_eq!(evaluate(&inputs, Profile::Pioneer), evaluate(&inputs, Profile::Pioneer));
    }

    #[test]
    fn test_room_type_cost_factor() {
        let three_room = DesignInputs::builder().room_type(RoomType::ThreeRoom).build();
        let two_room = DesignInputs::builder().room_type(RoomType::TwoRoom).build();
        let factor = evaluate(&three_room, Profile::Pioneer).design_cost.0
            / evaluate(&two_room, Profile::Pioneer).design_cost.0;
        // The PV capital term is outside the room factor.
        assert!(factor > 1.0 && factor < 1.15);
    }

    #[test]
    fn test_regional_climate_factors() {
        let harbin = DesignInputs::builder().climate_zone(ClimateZone::Harbin).build();
        let beijing = DesignInputs::builder().climate_zone(ClimateZone::Beijing).build();
        let harbin_metrics = evaluate(&harbin, Profile::Regional);
        let beijing_metrics = evaluate(&beijing, Profile::Regional);
        assert_abs_diff_eq!(harbin_metrics.baseline_eui.0, 140.0 * 1.25);
        assert!(harbin_metrics.pv_generation.0 < beijing_metrics.pv_generation.0);
        // Outside the regional release the zone must not leak into the result.
        assert_eq!(evaluate(&harbin, Profile::Pioneer), evaluate(&beijing, Profile::Pioneer));
    }

    #[test]
    fn test_per_capita_carbon_only_in_regional() {
        let inputs = DesignInputs::builder().occupants(4).build();
        assert_eq!(evaluate(&inputs, Profile::Pioneer).carbon_per_capita, None);
        let metrics = evaluate(&inputs, Profile::Regional);
        assert_abs_diff_eq!(
            metrics.carbon_per_capita.unwrap().0,
            metrics.design_carbon.0 / 4.0
        );
    }
}
