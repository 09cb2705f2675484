use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    inputs::{ClimateZone, DesignInputs, RoomType},
    prelude::*,
    profile::Profile,
    sweep::SweepParameter,
    units::Metres,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate one design alternative and print the dashboard.
    Evaluate(Box<EvaluateArgs>),

    /// Compose the plain-text assessment report.
    Report(Box<ReportArgs>),

    /// Vary one design factor over its declared range and tabulate the metrics.
    Sweep(Box<SweepArgs>),

    /// Show the three release profiles and their constant tables.
    Profiles,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    #[clap(flatten)]
    pub design: DesignArgs,

    /// Emit the metrics and scores as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub design: DesignArgs,

    /// Write the report to this path instead of stdout.
    #[clap(long, env = "CROFT_REPORT_PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SweepArgs {
    #[clap(flatten)]
    pub design: DesignArgs,

    #[clap(long, value_enum)]
    pub parameter: SweepParameter,
}

/// The sidebar, as flags. A TOML scenario file replaces the individual flags
/// wholesale when given.
#[derive(Parser)]
pub struct DesignArgs {
    /// Release profile to evaluate against.
    #[clap(long, value_enum, default_value = "pioneer", env = "CROFT_PROFILE")]
    pub profile: Profile,

    /// Load the design from a TOML scenario file instead of the flags below.
    #[clap(long, env = "CROFT_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Site frontage in metres.
    #[clap(long, default_value = "13.0", env = "CROFT_WIDTH")]
    pub width: Metres,

    /// Site depth in metres.
    #[clap(long, default_value = "10.0", env = "CROFT_DEPTH")]
    pub depth: Metres,

    /// EPS insulation thickness in millimetres.
    #[clap(long, default_value = "150", env = "CROFT_INSULATION_MM")]
    pub insulation_mm: u32,

    /// South-facing window-to-wall ratio.
    #[clap(long, default_value = "0.45", env = "CROFT_WINDOW_RATIO")]
    pub window_ratio: f64,

    /// Deviation from due south in degrees.
    #[clap(long, default_value = "0", allow_negative_numbers = true, env = "CROFT_ORIENTATION")]
    pub orientation_deg: i32,

    /// Fraction of the usable roof covered by PV panels; 0 disables the system.
    #[clap(long, default_value = "0.5", env = "CROFT_PV_COVERAGE")]
    pub pv_coverage: f64,

    #[clap(long, value_enum, default_value = "three-room", env = "CROFT_ROOM_TYPE")]
    pub room_type: RoomType,

    /// Household size.
    #[clap(long, default_value = "3", env = "CROFT_OCCUPANTS")]
    pub occupants: u32,

    #[clap(long, value_enum, default_value = "beijing", env = "CROFT_CLIMATE_ZONE")]
    pub climate_zone: ClimateZone,
}

impl DesignArgs {
    /// Assemble and validate the design, from the scenario file if one was
    /// given, otherwise from the flags.
    pub fn try_into_inputs(&self) -> Result<DesignInputs> {
        let inputs = if let Some(path) = &self.scenario {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read the scenario file `{}`", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("failed to parse the scenario file `{}`", path.display()))?
        } else {
            DesignInputs::builder()
                .width(self.width)
                .depth(self.depth)
                .insulation_mm(self.insulation_mm)
                .window_ratio(self.window_ratio)
                .orientation_deg(self.orientation_deg)
                .pv_coverage(self.pv_coverage)
                .room_type(self.room_type)
                .occupants(self.occupants)
                .climate_zone(self.climate_zone)
                .build()
        };
        inputs.validate()?;
        Ok(inputs)
    }
}
