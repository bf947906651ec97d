//! # lanzar
//!
//! Planar projectile-motion simulation core.
//!
//! A deterministic, fixed-step integration engine implementing:
//! - Explicit Euler integration with pluggable force laws
//! - Scaled-time catch-up clocking with bounded per-frame backlog
//! - One-shot crossing events (ground impact, launch-height return)
//! - Stop-on-error guarding against non-finite state
//!
//! ## Example
//!
//! ```rust
//! use lanzar::prelude::*;
//!
//! // Drive the reference tabletop launch with 60 fps frames
//! let mut sim = Simulation::new(SimConfig::default()).expect("valid config");
//! sim.start();
//! sim.step_frame(1.0 / 60.0).expect("step");
//! let state = sim.body_state();
//! assert!(state.y > 0.0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::no_effect_underscore_binding,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod scenarios;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{LaunchConfig, MotionKind, SimConfig, SimConfigBuilder};
    pub use crate::engine::motion::build_model;
    pub use crate::engine::{
        Body, BodyParams, BodyState, CrossingEvent, DragAugmented, EventDetector, EventLog,
        FiniteGuard, FramePacer, FrameReport, MotionModel, SimClock, SimTime, Simulation,
        UniformAcceleration, Vec2,
    };
    pub use crate::error::{SimError, SimResult};
    pub use crate::scenarios::{run_flight, FlightLimits, FlightReport, LaunchScenario};
}

/// Re-export for public API
pub use error::{SimError, SimResult};
