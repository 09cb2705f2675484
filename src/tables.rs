use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    engine::Metrics,
    profile::{Profile, TechAxis},
    score::Scores,
    sensitivity,
    sweep::SweepParameter,
    units::{Quantity, Years},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

/// The KPI strip at the top of the dashboard.
#[must_use]
pub fn build_metrics_table(metrics: &Metrics) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Indicator", "Value", "Context"]);

    let reduction = metrics.carbon_reduction();
    table.add_row(vec![
        Cell::new("Net carbon"),
        Cell::new(metrics.design_carbon).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}% below baseline", reduction * 100.0)).fg(if reduction > 0.0 {
            Color::Green
        } else {
            Color::Red
        }),
    ]);
    table.add_row(vec![
        Cell::new("Net EUI"),
        Cell::new(metrics.net_eui).set_alignment(CellAlignment::Right),
        Cell::new(format!("PV output {}", metrics.pv_generation)),
    ]);
    table.add_row(vec![
        Cell::new("Payback"),
        Cell::new(metrics.payback).set_alignment(CellAlignment::Right).fg(
            if metrics.payback < Years::from(10.0) { Color::Green } else { Color::Red },
        ),
        Cell::new(format!("over {}", metrics.incremental_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Thermal comfort (PMV)"),
        Cell::new(format!("{:+.2}", metrics.pmv)).set_alignment(CellAlignment::Right).fg(
            if metrics.pmv.abs() <= 0.5 { Color::Green } else { Color::DarkYellow },
        ),
        Cell::new("target 0"),
    ]);
    table.add_row(vec![
        Cell::new("Space efficiency"),
        Cell::new(format!("{:.2}", 1.0 / metrics.shape_coefficient))
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("shape coefficient {:.3}", metrics.shape_coefficient)),
    ]);
    if let Some(per_capita) = metrics.carbon_per_capita {
        table.add_row(vec![
            Cell::new("Carbon per occupant"),
            Cell::new(per_capita).set_alignment(CellAlignment::Right),
            Cell::new(""),
        ]);
    }
    table
}

/// Stacked-bar substitute: operational vs. material carbon, baseline against
/// the current design.
#[must_use]
pub fn build_carbon_table(metrics: &Metrics) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Scheme", "Operational", "Material", "Total"]);
    table.add_row(vec![
        Cell::new("Masonry baseline"),
        Cell::new(metrics.baseline_operational_carbon).set_alignment(CellAlignment::Right),
        Cell::new(metrics.baseline_material_carbon).set_alignment(CellAlignment::Right),
        Cell::new(metrics.baseline_carbon).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("This design"),
        Cell::new(metrics.design_operational_carbon).set_alignment(CellAlignment::Right),
        Cell::new(metrics.design_material_carbon).set_alignment(CellAlignment::Right),
        Cell::new(metrics.design_carbon).set_alignment(CellAlignment::Right).fg(
            if metrics.design_carbon < metrics.baseline_carbon { Color::Green } else { Color::Red },
        ),
    ]);
    table
}

/// Radar substitute: one row per score axis with a unicode bar.
#[must_use]
pub fn build_scores_table(scores: &Scores) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Axis", "Score", ""]);
    for (label, value) in scores.axes() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar = "▇".repeat((value / 5.0).round() as usize);
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{value:.1}")).set_alignment(CellAlignment::Right),
            Cell::new(bar).fg(if value >= 80.0 { Color::Green } else { Color::DarkYellow }),
        ]);
    }
    table
}

/// Tornado substitute: carbon-sensitivity ranking, dominant factor first.
#[must_use]
pub fn build_sensitivity_table(profile: Profile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Design factor", "Influence", ""]);
    for (rank, factor) in sensitivity::ranked(profile).into_iter().enumerate() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar = "▇".repeat((factor.influence * 40.0).round() as usize);
        let mut name = Cell::new(factor.name);
        if rank == 0 {
            name = name.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            name,
            Cell::new(format!("{:.2}", factor.influence)).set_alignment(CellAlignment::Right),
            Cell::new(bar).fg(Color::Blue),
        ]);
    }
    table
}

#[must_use]
pub fn build_sweep_table(parameter: SweepParameter, rows: &[(f64, Metrics)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(parameter),
        Cell::new("Design EUI"),
        Cell::new("Net EUI"),
        Cell::new("Carbon"),
        Cell::new("Payback"),
    ]);
    let best_net_eui = rows.iter().map(|(_, metrics)| metrics.net_eui).reduce(Quantity::min);
    for (value, metrics) in rows {
        table.add_row(vec![
            Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right),
            Cell::new(metrics.design_eui).set_alignment(CellAlignment::Right),
            Cell::new(metrics.net_eui).set_alignment(CellAlignment::Right).fg(
                if Some(metrics.net_eui) == best_net_eui { Color::Green } else { Color::Reset },
            ),
            Cell::new(metrics.design_carbon).set_alignment(CellAlignment::Right),
            Cell::new(metrics.payback).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// One column per release profile, one row per constant that differs.
#[must_use]
pub fn build_profiles_table() -> Table {
    let mut table = new_table();
    table.set_header(
        std::iter::once(Cell::new("Constant"))
            .chain(Profile::ALL.iter().map(|profile| Cell::new(profile)))
            .collect_vec(),
    );

    let row = |label: &str, values: [String; 3]| {
        std::iter::once(Cell::new(label))
            .chain(values.into_iter().map(|value| {
                Cell::new(value).set_alignment(CellAlignment::Right)
            }))
            .collect_vec()
    };

    table.add_row(row(
        "Baseline EUI (kWh/m²·a)",
        Profile::ALL.map(|profile| format!("{:.0}", profile.constants().baseline_eui)),
    ));
    table.add_row(row(
        "Orientation slope",
        Profile::ALL.map(|profile| {
            profile
                .constants()
                .orientation_eui_slope
                .map_or_else(|| "—".to_owned(), |slope| format!("{slope:.1}"))
        }),
    ));
    table.add_row(row(
        "Climate adjusted",
        Profile::ALL.map(|profile| {
            if profile.constants().climate_adjusted { "yes" } else { "no" }.to_owned()
        }),
    ));
    table.add_row(row(
        "PV capital (万元/m²)",
        Profile::ALL.map(|profile| format!("{:.3}", profile.constants().pv_unit_cost)),
    ));
    table.add_row(row(
        "Room cost factors",
        Profile::ALL.map(|profile| format!("{:?}", profile.constants().room_cost_factors)),
    ));
    table.add_row(row(
        "Room material factors",
        Profile::ALL.map(|profile| format!("{:?}", profile.constants().room_material_factors)),
    ));
    table.add_row(row(
        "Per-capita carbon",
        Profile::ALL.map(|profile| {
            if profile.constants().per_capita_carbon { "yes" } else { "no" }.to_owned()
        }),
    ));
    table.add_row(row(
        "Sixth radar axis",
        Profile::ALL.map(|profile| match profile.constants().tech_axis {
            TechAxis::Industrialization(fixed) => format!("industrialization {fixed:.0}"),
            TechAxis::PvShare => "PV share".to_owned(),
        }),
    ));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::evaluate, inputs::DesignInputs, score::score, sweep};

    #[test]
    fn test_metrics_table_shape() {
        let metrics = evaluate(&DesignInputs::default(), Profile::Pioneer);
        let table = build_metrics_table(&metrics);
        assert_eq!(table.row_iter().count(), 5);
        let regional = evaluate(&DesignInputs::default(), Profile::Regional);
        assert_eq!(build_metrics_table(&regional).row_iter().count(), 6);
    }

    #[test]
    fn test_scores_table_has_six_axes() {
        let metrics = evaluate(&DesignInputs::default(), Profile::Pioneer);
        let scores = score(&metrics, Profile::Pioneer);
        assert_eq!(build_scores_table(&scores).row_iter().count(), 6);
    }

    #[test]
    fn test_sweep_table_row_per_step() {
        let rows =
            sweep::sweep(&DesignInputs::default(), SweepParameter::Insulation, Profile::Pioneer);
        assert_eq!(build_sweep_table(SweepParameter::Insulation, &rows).row_iter().count(), 16);
    }
}
