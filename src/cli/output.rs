//! Report rendering.
//!
//! Human-readable terminal output; the JSON path is a straight serde
//! pass and lives with the command handlers.

use crate::config::MotionKind;
use crate::scenarios::{FlightReport, LaunchScenario};

/// Print version information, including the build commit when known.
pub fn print_version() {
    match option_env!("LANZAR_GIT_HASH") {
        Some(hash) => println!("lanzar {} ({hash})", env!("CARGO_PKG_VERSION")),
        None => println!("lanzar {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"lanzar - Planar projectile-motion simulation core

USAGE:
    lanzar <COMMAND> [OPTIONS]

COMMANDS:
    run [config.yaml]           Fly a launch to ground and report the result
        --time-scale <LOG10>    Override the initial time-scale exponent
        --drag-free             Force the drag-free motion model
        --json                  Emit the flight report as JSON
        -v, --verbose           Enable verbose output

    validate <config.yaml>      Validate a config file against the schema

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    lanzar run
    lanzar run demos/tabletop.yaml
    lanzar run demos/tabletop.yaml --drag-free --json
    lanzar run --time-scale -2
    lanzar validate demos/tabletop.yaml

Omitting the config file runs the reference tabletop launch: a
table-tennis-ball sized projectile leaving a desk edge at 45 degrees.
Negative time-scale exponents stretch wall time, so a deeply slowed run
may exhaust its frame budget before the body lands.
"
    );
}

/// Print a flight report in human-readable form.
///
/// # Arguments
///
/// * `report` - The flight report to display
/// * `scenario` - The scenario that produced it
/// * `verbose` - Whether to show the full configuration
pub fn print_flight_report(report: &FlightReport, scenario: &LaunchScenario, verbose: bool) {
    let config = scenario.config();
    let motion = match config.motion {
        MotionKind::UniformAcceleration => "uniform acceleration",
        MotionKind::DragAugmented => "drag-augmented",
    };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Launch: {} m/s at {:.4} rad, {} m high",
        config.launch.speed, config.launch.angle, config.launch.height
    );
    println!(
        "Motion: {motion}, g = {} m/s², dt = {} s",
        config.launch.gravity,
        config.dt()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Events:");
    print_event(
        "launch-height return",
        report.events.launch_return_fired,
        report.events.launch_return_time,
        report.events.launch_return_x,
    );
    print_event(
        "ground impact",
        report.events.ground_fired,
        report.events.ground_time,
        report.events.ground_x,
    );

    if let (Some(delta_time), Some(delta_x)) = (report.events.delta_time, report.events.delta_x) {
        println!("  Δt = {delta_time:.6} s, Δx = {delta_x:.6} m");
    }

    println!("\nFlight:");
    println!("  steps:     {}", report.steps);
    println!("  simulated: {:.6} s", report.simulated_secs);
    println!(
        "  frames:    {} ({} capped)",
        report.frames, report.capped_frames
    );
    println!(
        "  rest:      x = {:.6} m, y = {:.6} m",
        report.final_state.x, report.final_state.y
    );

    if !report.events.ground_fired {
        println!("\nNo landing: frame budget exhausted before ground impact.");
    }

    if verbose {
        if let Ok(yaml) = config.to_yaml() {
            println!("\nConfiguration:\n{yaml}");
        }
    }
}

/// Print one crossing-event line.
fn print_event(name: &str, fired: bool, time: Option<f64>, x: Option<f64>) {
    match (fired, time, x) {
        (true, Some(time), Some(x)) => {
            println!("  {name}: t = {time:.6} s, x = {x:.6} m");
        }
        _ => println!("  {name}: pending"),
    }
}
