use std::ops::RangeInclusive;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, units::Metres, units::SquareMetres};

pub const WIDTH_RANGE: RangeInclusive<f64> = 8.0..=25.0;
pub const DEPTH_RANGE: RangeInclusive<f64> = 8.0..=25.0;
pub const INSULATION_RANGE: RangeInclusive<u32> = 50..=200;
pub const WINDOW_RATIO_RANGE: RangeInclusive<f64> = 0.2..=0.8;
pub const ORIENTATION_RANGE: RangeInclusive<i32> = -45..=45;
pub const PV_COVERAGE_RANGE: RangeInclusive<f64> = 0.2..=0.8;
pub const OCCUPANTS_RANGE: RangeInclusive<u32> = 1..=10;

/// One design alternative, as dialled in on the sidebar of the original
/// dashboard. Immutable; a fresh value is constructed per evaluation.
#[derive(Builder, Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignInputs {
    /// Site frontage.
    #[builder(default = Metres::from(13.0))]
    pub width: Metres,

    /// Site depth.
    #[builder(default = Metres::from(10.0))]
    pub depth: Metres,

    /// EPS insulation thickness in millimetres.
    #[builder(default = 150)]
    pub insulation_mm: u32,

    /// South-facing window-to-wall ratio.
    #[builder(default = 0.45)]
    pub window_ratio: f64,

    /// Deviation from due south in degrees.
    #[builder(default = 0)]
    pub orientation_deg: i32,

    /// Fraction of the usable roof covered by photovoltaic panels.
    /// Zero means the rooftop system is not deployed.
    #[builder(default = 0.5)]
    pub pv_coverage: f64,

    #[builder(default = RoomType::ThreeRoom)]
    pub room_type: RoomType,

    /// Household size, used for per-capita carbon where the profile models it.
    #[builder(default = 3)]
    pub occupants: u32,

    #[builder(default = ClimateZone::Beijing)]
    pub climate_zone: ClimateZone,
}

impl Default for DesignInputs {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DesignInputs {
    pub fn floor_area(&self) -> SquareMetres {
        self.width * self.depth
    }

    /// Reject values outside the declared widget ranges. The engine itself is
    /// total and never re-validates; scenario files and programmatic callers
    /// go through here.
    pub fn validate(&self) -> Result {
        ensure!(
            WIDTH_RANGE.contains(&self.width.0),
            "site width {} is outside {WIDTH_RANGE:?} m",
            self.width,
        );
        ensure!(
            DEPTH_RANGE.contains(&self.depth.0),
            "site depth {} is outside {DEPTH_RANGE:?} m",
            self.depth,
        );
        ensure!(
            INSULATION_RANGE.contains(&self.insulation_mm),
            "insulation thickness {} mm is outside {INSULATION_RANGE:?} mm",
            self.insulation_mm,
        );
        ensure!(
            WINDOW_RATIO_RANGE.contains(&self.window_ratio),
            "window-to-wall ratio {} is outside {WINDOW_RATIO_RANGE:?}",
            self.window_ratio,
        );
        ensure!(
            ORIENTATION_RANGE.contains(&self.orientation_deg),
            "orientation deviation {}° is outside {ORIENTATION_RANGE:?}°",
            self.orientation_deg,
        );
        ensure!(
            self.pv_coverage == 0.0 || PV_COVERAGE_RANGE.contains(&self.pv_coverage),
            "PV coverage {} must be 0 (disabled) or within {PV_COVERAGE_RANGE:?}",
            self.pv_coverage,
        );
        ensure!(
            OCCUPANTS_RANGE.contains(&self.occupants),
            "occupant count {} is outside {OCCUPANTS_RANGE:?}",
            self.occupants,
        );
        Ok(())
    }
}

/// Floor-plan family of the original layout catalogue.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, clap::ValueEnum, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    /// 两室一厅.
    #[display("两室一厅")]
    TwoRoom,

    /// 三室一厅.
    #[display("三室一厅")]
    ThreeRoom,

    /// 四室两厅.
    #[display("四室两厅")]
    FourRoom,
}

/// Enumerated cold-region locations. Each carries a heating-load multiplier
/// applied to the baseline EUI and a solar-yield multiplier applied to the
/// PV annual yield; Beijing is the neutral reference.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, clap::ValueEnum, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateZone {
    #[display("Harbin")]
    Harbin,

    #[display("Shenyang")]
    Shenyang,

    #[display("Beijing")]
    Beijing,

    #[display("Lanzhou")]
    Lanzhou,
}

impl ClimateZone {
    pub const fn heating_factor(self) -> f64 {
        match self {
            Self::Harbin => 1.25,
            Self::Shenyang => 1.10,
            Self::Beijing => 1.00,
            Self::Lanzhou => 0.95,
        }
    }

    pub const fn solar_factor(self) -> f64 {
        match self {
            Self::Harbin => 0.92,
            Self::Shenyang => 0.96,
            Self::Beijing => 1.00,
            Self::Lanzhou => 1.08,
        }
    }
}
