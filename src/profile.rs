use serde::{Deserialize, Serialize};

use crate::inputs::RoomType;

/// The three successive releases of the dashboard. Each one is the same
/// evaluation algorithm over a different constants table, so that the
/// variants cannot drift apart behaviourally.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// First release: orientation term, PV capital quoted at 400 ¥/m² of panel.
    #[default]
    #[display("pioneer")]
    Pioneer,

    /// Second release: revised baseline, room-type factor also applied to
    /// material carbon.
    #[display("economic")]
    Economic,

    /// Third release: climate-zone factors, per-capita carbon, and a PV-share
    /// radar axis instead of the fixed industrialization score.
    #[display("regional")]
    Regional,
}

impl Profile {
    pub const ALL: [Self; 3] = [Self::Pioneer, Self::Economic, Self::Regional];

    pub const fn constants(self) -> &'static ProfileConstants {
        match self {
            Self::Pioneer => &PIONEER,
            Self::Economic => &ECONOMIC,
            Self::Regional => &REGIONAL,
        }
    }
}

/// Sixth radar axis: early releases pinned it to a fixed industrialization
/// score, the regional release derives it from the PV share of annual demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TechAxis {
    Industrialization(f64),
    PvShare,
}

/// Per-release constants table. All energy terms are kWh/m²·a, carbon
/// intensities tCO₂e/m², costs 万元 unless noted.
#[derive(Clone, Copy, Debug)]
pub struct ProfileConstants {
    pub baseline_eui: f64,
    pub min_design_eui: f64,
    /// EUI drop per millimetre of insulation.
    pub insulation_eui_slope: f64,
    /// EUI penalty per unit of shape coefficient.
    pub shape_eui_slope: f64,
    /// EUI penalty per unit of window-ratio deviation from the pivot.
    pub window_eui_slope: f64,
    pub window_ratio_pivot: f64,
    /// EUI penalty per degree of orientation deviation; absent where the
    /// release did not model orientation.
    pub orientation_eui_slope: Option<f64>,
    /// Apply the climate zone's heating and solar multipliers.
    pub climate_adjusted: bool,

    /// Fraction of the footprint usable as PV roof.
    pub roof_usable_fraction: f64,
    /// Annual yield per m² of panel, kWh.
    pub pv_yield: f64,

    /// Grid emission factor, kg CO₂e per kWh.
    pub grid_emission_factor: f64,
    /// Assessment life span, years.
    pub life_span: f64,
    pub baseline_material_intensity: f64,
    pub material_intensity_base: f64,
    pub material_intensity_per_mm: f64,
    /// Embodied carbon of the panels, t per m² of panel.
    pub pv_material_intensity: f64,
    pub room_material_factors: [f64; 3],

    pub baseline_cost_fixed: f64,
    pub baseline_cost_per_area: f64,
    pub design_cost_per_area: f64,
    pub insulation_cost_per_mm: f64,
    pub room_cost_factors: [f64; 3],
    /// PV capital cost, 万元 per m² of panel.
    pub pv_unit_cost: f64,

    /// Grid tariff, 元 per kWh.
    pub electricity_price: f64,
    /// "Never pays back" sentinel, years.
    pub payback_sentinel: f64,
    /// Divide total design carbon by the occupant count.
    pub per_capita_carbon: bool,

    pub tech_axis: TechAxis,
    pub carbon_score_floor: f64,
    pub energy_score_floor: f64,
    pub roi_score_floor: f64,
    pub space_score_floor: f64,
    pub comfort_score_floor: f64,
}

impl ProfileConstants {
    pub const fn room_cost_factor(&self, room_type: RoomType) -> f64 {
        self.room_cost_factors[room_index(room_type)]
    }

    pub const fn room_material_factor(&self, room_type: RoomType) -> f64 {
        self.room_material_factors[room_index(room_type)]
    }
}

const fn room_index(room_type: RoomType) -> usize {
    match room_type {
        RoomType::TwoRoom => 0,
        RoomType::ThreeRoom => 1,
        RoomType::FourRoom => 2,
    }
}

pub const PIONEER: ProfileConstants = ProfileConstants {
    baseline_eui: 140.0,
    min_design_eui: 45.0,
    insulation_eui_slope: 0.35,
    shape_eui_slope: 15.0,
    window_eui_slope: 20.0,
    window_ratio_pivot: 0.45,
    orientation_eui_slope: Some(0.4),
    climate_adjusted: false,
    roof_usable_fraction: 0.5,
    pv_yield: 130.0,
    grid_emission_factor: 0.5810,
    life_span: 50.0,
    baseline_material_intensity: 0.35,
    material_intensity_base: 0.20,
    material_intensity_per_mm: 0.0005,
    pv_material_intensity: 0.08,
    room_material_factors: [1.0, 1.0, 1.0],
    baseline_cost_fixed: 10.0,
    baseline_cost_per_area: 0.10,
    design_cost_per_area: 0.13,
    insulation_cost_per_mm: 0.05,
    room_cost_factors: [1.0, 1.15, 1.0],
    // 400 元/m² of panel, quoted in 万元.
    pv_unit_cost: 400.0 / 10_000.0,
    electricity_price: 0.55,
    payback_sentinel: 99.0,
    per_capita_carbon: false,
    tech_axis: TechAxis::Industrialization(95.0),
    carbon_score_floor: 0.0,
    energy_score_floor: 60.0,
    roi_score_floor: 50.0,
    space_score_floor: 70.0,
    comfort_score_floor: 60.0,
};

pub const ECONOMIC: ProfileConstants = ProfileConstants {
    baseline_eui: 145.0,
    orientation_eui_slope: None,
    room_material_factors: [1.0, 1.15, 1.25],
    room_cost_factors: [1.0, 1.15, 1.25],
    pv_unit_cost: 0.04,
    tech_axis: TechAxis::Industrialization(90.0),
    ..PIONEER
};

pub const REGIONAL: ProfileConstants = ProfileConstants {
    orientation_eui_slope: None,
    climate_adjusted: true,
    pv_unit_cost: 0.04,
    per_capita_carbon: true,
    tech_axis: TechAxis::PvShare,
    ..PIONEER
};
