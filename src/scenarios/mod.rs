//! Pre-built simulation scenarios.
//!
//! Currently ships the reference tabletop launch in dragged and
//! drag-free variants, plus the frame-driving loop used by the CLI and
//! the acceptance tests.

pub mod launch;

pub use launch::{run_flight, FlightLimits, FlightReport, LaunchScenario};
