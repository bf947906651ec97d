//! Command execution.
//!
//! Each handler takes plain arguments and returns an `ExitCode`, keeping
//! process-exit policy in one place and every path callable from tests.

use std::path::Path;
use std::process::ExitCode;

use crate::config::{MotionKind, SimConfig};
use crate::scenarios::{run_flight, FlightLimits, LaunchScenario};

use super::output::{print_flight_report, print_help, print_version};
use super::{Args, Command};

/// Dispatch a parsed command line to its handler.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            time_scale_override,
            drag_free,
            json,
            verbose,
        } => run_launch(
            config_path.as_deref(),
            time_scale_override,
            drag_free,
            json,
            verbose,
        ),
        Command::Validate { config_path } => validate_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Fly a launch to ground and report the result.
///
/// # Arguments
///
/// * `path` - Optional config YAML path; defaults apply when `None`
/// * `time_scale_override` - Optional override for the initial exponent
/// * `drag_free` - Force the drag-free motion model
/// * `json` - Emit the flight report as JSON instead of text
/// * `verbose` - Whether to enable verbose output
#[must_use]
pub fn run_launch(
    path: Option<&Path>,
    time_scale_override: Option<f64>,
    drag_free: bool,
    json: bool,
    verbose: bool,
) -> ExitCode {
    crate::logging::init(verbose);

    let mut config = match path {
        Some(p) => match SimConfig::load(p) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        },
        None => SimConfig::default(),
    };

    if let Some(log10) = time_scale_override {
        config.time_scale.initial_log10 = log10;
    }
    if drag_free {
        config.motion = MotionKind::UniformAcceleration;
    }

    let scenario = LaunchScenario::from_config(config);
    match run_flight(&scenario, FlightLimits::default()) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(body) => {
                        println!("{body}");
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        ExitCode::from(1)
                    }
                }
            } else {
                print_flight_report(&report, &scenario, verbose);
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Validate a config YAML file.
///
/// # Arguments
///
/// * `path` - Path to the config YAML file
#[must_use]
pub fn validate_config(path: &Path) -> ExitCode {
    match SimConfig::load(path) {
        Ok(config) => {
            println!("✓ {} is valid", path.display());
            println!("  timestep: {} s", config.dt());
            println!("  motion:   {:?}", config.motion);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}: {e}", path.display());
            ExitCode::from(1)
        }
    }
}
