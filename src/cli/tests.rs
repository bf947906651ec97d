//! Tests for the CLI surface.
//!
//! Covers argument parsing, command dispatch, and output formatting.

use super::args::{Args, Command};
use super::commands::{run_cli, validate_config};
use super::output::{print_flight_report, print_help, print_version};
use crate::engine::{BodyState, EventLog};
use crate::scenarios::{FlightReport, LaunchScenario};
use std::path::PathBuf;
use std::process::ExitCode;

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["lanzar"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_flag() {
    let args = Args::parse_from(["lanzar", "-h"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_long_flag() {
    let args = Args::parse_from(["lanzar", "--help"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_command() {
    let args = Args::parse_from(["lanzar", "help"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_version_flag() {
    let args = Args::parse_from(["lanzar", "-V"]);
    assert_eq!(args.command, Command::Version);
}

#[test]
fn test_parse_version_long_flag() {
    let args = Args::parse_from(["lanzar", "--version"]);
    assert_eq!(args.command, Command::Version);
}

#[test]
fn test_parse_version_command() {
    let args = Args::parse_from(["lanzar", "version"]);
    assert_eq!(args.command, Command::Version);
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["lanzar", "unknown-cmd"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_defaults() {
    let args = Args::parse_from(["lanzar", "run"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: None,
            time_scale_override: None,
            drag_free: false,
            json: false,
            verbose: false,
        }
    );
}

#[test]
fn test_parse_run_with_config_path() {
    let args = Args::parse_from(["lanzar", "run", "launch.yaml"]);
    match args.command {
        Command::Run { config_path, .. } => {
            assert_eq!(config_path, Some(PathBuf::from("launch.yaml")));
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_with_flags() {
    let args = Args::parse_from(["lanzar", "run", "launch.yaml", "--drag-free", "--json", "-v"]);
    match args.command {
        Command::Run {
            config_path,
            drag_free,
            json,
            verbose,
            ..
        } => {
            assert_eq!(config_path, Some(PathBuf::from("launch.yaml")));
            assert!(drag_free);
            assert!(json);
            assert!(verbose);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_with_time_scale() {
    let args = Args::parse_from(["lanzar", "run", "--time-scale", "-2.5"]);
    match args.command {
        Command::Run {
            time_scale_override,
            ..
        } => {
            assert_eq!(time_scale_override, Some(-2.5));
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_time_scale_missing_value() {
    let args = Args::parse_from(["lanzar", "run", "--time-scale"]);
    match args.command {
        Command::Run {
            time_scale_override,
            ..
        } => {
            assert_eq!(time_scale_override, None);
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_ignores_unknown_flag() {
    let args = Args::parse_from(["lanzar", "run", "--frobnicate", "launch.yaml"]);
    match args.command {
        Command::Run { config_path, .. } => {
            assert_eq!(config_path, Some(PathBuf::from("launch.yaml")));
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_run_keeps_first_path() {
    let args = Args::parse_from(["lanzar", "run", "first.yaml", "second.yaml"]);
    match args.command {
        Command::Run { config_path, .. } => {
            assert_eq!(config_path, Some(PathBuf::from("first.yaml")));
        }
        other => panic!("Expected Run command, got {other:?}"),
    }
}

#[test]
fn test_parse_validate_command() {
    let args = Args::parse_from(["lanzar", "validate", "launch.yaml"]);
    assert_eq!(
        args.command,
        Command::Validate {
            config_path: PathBuf::from("launch.yaml"),
        }
    );
}

#[test]
fn test_parse_validate_without_path_shows_help() {
    let args = Args::parse_from(["lanzar", "validate"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Command dispatch tests
// ============================================================================

#[test]
fn test_run_cli_help() {
    let args = Args::parse_from(["lanzar", "help"]);
    let exit = run_cli(args);
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_version() {
    let args = Args::parse_from(["lanzar", "version"]);
    let exit = run_cli(args);
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_run_with_missing_config() {
    let args = Args::parse_from(["lanzar", "run", "/nonexistent/launch.yaml"]);
    let exit = run_cli(args);
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_validate_missing_file() {
    let args = Args::parse_from(["lanzar", "validate", "/nonexistent/launch.yaml"]);
    let exit = run_cli(args);
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_validate_accepts_valid_config() {
    let path = std::env::temp_dir().join("lanzar_cli_valid.yaml");
    std::fs::write(&path, "timestep:\n  dt: 0.000001\n").unwrap();

    let exit = validate_config(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_validate_rejects_bad_config() {
    let path = std::env::temp_dir().join("lanzar_cli_invalid.yaml");
    std::fs::write(&path, "launch:\n  mass: -1.0\n").unwrap();

    let exit = validate_config(&path);
    let _ = std::fs::remove_file(&path);
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_run_coarse_config_lands() {
    let path = std::env::temp_dir().join("lanzar_cli_coarse.yaml");
    std::fs::write(
        &path,
        "timestep:\n  dt: 0.0001\nmotion: uniform-acceleration\n",
    )
    .unwrap();

    let args = Args {
        command: Command::Run {
            config_path: Some(path.clone()),
            time_scale_override: None,
            drag_free: false,
            json: true,
            verbose: false,
        },
    };
    let exit = run_cli(args);
    let _ = std::fs::remove_file(&path);
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_rejects_out_of_range_time_scale_override() {
    let path = std::env::temp_dir().join("lanzar_cli_scale.yaml");
    std::fs::write(&path, "timestep:\n  dt: 0.0001\n").unwrap();

    let args = Args {
        command: Command::Run {
            config_path: Some(path.clone()),
            time_scale_override: Some(9.0),
            drag_free: false,
            json: true,
            verbose: false,
        },
    };
    let exit = run_cli(args);
    let _ = std::fs::remove_file(&path);
    assert_ne!(exit, ExitCode::SUCCESS);
}

// ============================================================================
// Output formatting tests
// ============================================================================

fn sample_report() -> FlightReport {
    FlightReport {
        events: EventLog {
            ground_fired: true,
            ground_time: Some(0.351_288),
            ground_x: Some(0.452_074),
            launch_return_fired: true,
            launch_return_time: Some(0.262_462),
            launch_return_x: Some(0.337_771),
            delta_time: Some(0.088_826),
            delta_x: Some(0.114_303),
        },
        steps: 35_129,
        simulated_secs: 0.351_29,
        frames: 22,
        capped_frames: 0,
        final_state: BodyState {
            x: 0.452_074,
            y: -0.000_01,
            radius: 0.012_95,
        },
    }
}

#[test]
fn test_print_help_does_not_panic() {
    print_help();
}

#[test]
fn test_print_version_does_not_panic() {
    print_version();
}

#[test]
fn test_print_flight_report_complete() {
    let report = sample_report();
    print_flight_report(&report, &LaunchScenario::tabletop_drag_free(), false);
    print_flight_report(&report, &LaunchScenario::tabletop(), true);
}

#[test]
fn test_print_flight_report_pending_events() {
    let mut report = sample_report();
    report.events = EventLog {
        ground_fired: false,
        ground_time: None,
        ground_x: None,
        launch_return_fired: false,
        launch_return_time: None,
        launch_return_x: None,
        delta_time: None,
        delta_x: None,
    };
    print_flight_report(&report, &LaunchScenario::tabletop(), false);
}
