use std::fmt::Write;

use chrono::Local;

use crate::{
    engine::Metrics,
    inputs::DesignInputs,
    profile::Profile,
    score::Scores,
    sensitivity,
    units::AnnualCost,
};

/// Compose the plain-text assessment report of the original dashboard's
/// download button: current inputs and derived metrics substituted into a
/// fixed template. No markup, printable as-is.
#[must_use]
pub fn render(
    inputs: &DesignInputs,
    metrics: &Metrics,
    scores: &Scores,
    profile: Profile,
) -> String {
    let constants = profile.constants();
    let mut report = String::new();

    // Infallible: `write!` into a `String` cannot fail.
    let _ = writeln!(report, "Low-carbon rural housing assessment — {profile} profile");
    let _ = writeln!(report, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M"));
    let _ = writeln!(report);

    let _ = writeln!(report, "Design");
    let _ = writeln!(
        report,
        "  Site: {} × {} ({})",
        inputs.width,
        inputs.depth,
        metrics.floor_area,
    );
    let _ = writeln!(report, "  Room type: {}", inputs.room_type);
    let _ = writeln!(report, "  EPS insulation: {} mm", inputs.insulation_mm);
    let _ = writeln!(report, "  Window-to-wall ratio: {:.2}", inputs.window_ratio);
    if constants.orientation_eui_slope.is_some() {
        let _ = writeln!(report, "  Orientation deviation: {}°", inputs.orientation_deg);
    }
    if inputs.pv_coverage > 0.0 {
        let _ = writeln!(
            report,
            "  Rooftop PV: {:.0}% of the usable roof",
            inputs.pv_coverage * 100.0,
        );
    } else {
        let _ = writeln!(report, "  Rooftop PV: not deployed");
    }
    if constants.climate_adjusted {
        let _ = writeln!(report, "  Climate zone: {}", inputs.climate_zone);
    }
    if constants.per_capita_carbon {
        let _ = writeln!(report, "  Occupants: {}", inputs.occupants);
    }
    let _ = writeln!(report);

    let _ = writeln!(report, "Energy");
    let _ = writeln!(report, "  Shape coefficient: {:.3}", metrics.shape_coefficient);
    let _ = writeln!(report, "  Baseline EUI: {}", metrics.baseline_eui);
    let _ = writeln!(report, "  Design EUI: {}", metrics.design_eui);
    let _ = writeln!(report, "  PV generation: {}", metrics.pv_generation);
    let _ = writeln!(report, "  Net EUI: {}", metrics.net_eui);
    let _ = writeln!(report);

    let _ = writeln!(report, "Carbon ({:.0}-year life cycle)", constants.life_span);
    let _ = writeln!(
        report,
        "  Baseline: {} ({} operational + {} material)",
        metrics.baseline_carbon,
        metrics.baseline_operational_carbon,
        metrics.baseline_material_carbon,
    );
    let _ = writeln!(
        report,
        "  Design: {} ({} operational + {} material)",
        metrics.design_carbon,
        metrics.design_operational_carbon,
        metrics.design_material_carbon,
    );
    let _ = writeln!(report, "  Reduction: {:.1}%", metrics.carbon_reduction() * 100.0);
    if let Some(per_capita) = metrics.carbon_per_capita {
        let _ = writeln!(report, "  Per occupant: {per_capita}");
    }
    let _ = writeln!(report);

    let _ = writeln!(report, "Economics");
    let _ = writeln!(report, "  Baseline cost: {}", metrics.baseline_cost);
    let _ = writeln!(report, "  Design cost: {}", metrics.design_cost);
    let _ = writeln!(report, "  Incremental cost: {}", metrics.incremental_cost);
    let _ = writeln!(report, "  Annual savings: {}", metrics.annual_savings);
    if metrics.annual_savings > AnnualCost::ZERO {
        let _ = writeln!(report, "  Payback: {}", metrics.payback);
    } else {
        let _ = writeln!(report, "  Payback: not recovered over the assessment life");
    }
    let _ = writeln!(report);

    let _ = writeln!(report, "Comfort");
    let _ = writeln!(report, "  PMV: {:+.2} (target 0)", metrics.pmv);
    let _ = writeln!(report);

    let _ = writeln!(report, "Scores");
    for (label, value) in scores.axes() {
        let _ = writeln!(report, "  {label}: {value:.1}");
    }
    let _ = writeln!(report);

    let dominant = sensitivity::dominant(profile);
    let _ = writeln!(
        report,
        "Dominant carbon factor: {} (influence {:.2})",
        dominant.name,
        dominant.influence,
    );

    report
}
