mod cli;
mod engine;
mod inputs;
mod prelude;
mod profile;
mod report;
mod score;
mod sensitivity;
mod sweep;
mod tables;
mod units;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Evaluate(args) => {
            let inputs = args.design.try_into_inputs()?;
            let profile = args.design.profile;
            let metrics = engine::evaluate(&inputs, profile);
            let scores = score::score(&metrics, profile);
            debug!(%profile, area = %metrics.floor_area, "evaluated");

            if args.json {
                let evaluation = json!({
                    "profile": profile,
                    "inputs": inputs,
                    "metrics": metrics,
                    "scores": scores,
                });
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                println!("{}", tables::build_metrics_table(&metrics));
                println!("{}", tables::build_carbon_table(&metrics));
                println!("{}", tables::build_scores_table(&scores));
                println!("{}", tables::build_sensitivity_table(profile));
            }
            Ok(())
        }

        Command::Report(args) => {
            let inputs = args.design.try_into_inputs()?;
            let profile = args.design.profile;
            let metrics = engine::evaluate(&inputs, profile);
            let scores = score::score(&metrics, profile);
            let report = report::render(&inputs, &metrics, &scores, profile);
            match args.output {
                Some(path) => {
                    std::fs::write(&path, &report).with_context(|| {
                        format!("failed to write the report to `{}`", path.display())
                    })?;
                    info!(path = %path.display(), "report written");
                }
                None => print!("{report}"),
            }
            Ok(())
        }

        Command::Sweep(args) => {
            let inputs = args.design.try_into_inputs()?;
            let rows = sweep::sweep(&inputs, args.parameter, args.design.profile);
            println!("{}", tables::build_sweep_table(args.parameter, &rows));
            Ok(())
        }

        Command::Profiles => {
            println!("{}", tables::build_profiles_table());
            Ok(())
        }
    }
}
