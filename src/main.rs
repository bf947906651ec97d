//! lanzar CLI - Planar projectile-motion simulation
//!
//! Command-line interface for running launch simulations.

use std::process::ExitCode;

use lanzar::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
