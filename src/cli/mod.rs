//! Command-line interface.
//!
//! Everything the binary does lives here rather than in main.rs, so the
//! whole surface is reachable from unit tests. `run_cli` takes parsed
//! arguments and returns the process exit code.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{run_cli, run_launch, validate_config};
pub use output::{print_flight_report, print_help, print_version};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
