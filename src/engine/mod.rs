//! Fixed-step simulation engine.
//!
//! Implements projectile integration with:
//! - A catch-up clock separating scaled elapsed time from simulated time
//! - Pluggable force laws behind the [`MotionModel`] trait
//! - Bounded per-frame catch-up via [`FramePacer`]
//! - One-shot crossing detection for ground and launch-height returns
//! - Finite-state guards for stop-on-error
//!
//! [`Simulation`] owns every piece of run state explicitly; there are no
//! globals, so independent instances never interfere.

pub mod body;
pub mod clock;
pub mod events;
pub mod jidoka;
pub mod motion;
pub mod pacing;
pub mod vec2;

use log::warn;
use serde::{Deserialize, Serialize};

pub use body::{Body, BodyParams};
pub use clock::SimClock;
pub use events::{CrossingEvent, EventDetector, EventLog};
pub use jidoka::FiniteGuard;
pub use motion::{DragAugmented, MotionModel, UniformAcceleration};
pub use pacing::{FramePacer, FrameReport, DEFAULT_MAX_SUBSTEPS_PER_FRAME};
pub use vec2::Vec2;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};

/// Lowest supported time-scale exponent (multiplier 10⁻⁵).
pub const MIN_LOG_TIME_SCALE: f64 = -5.0;

/// Highest supported time-scale exponent (multiplier 10⁵).
pub const MAX_LOG_TIME_SCALE: f64 = 5.0;

/// Nanoseconds per second conversion factor.
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Simulated time since run start.
///
/// Fixed-point, whole nanoseconds, so identical runs agree bit-for-bit
/// across platforms. At the reference timestep of 1e-8 s a step is
/// exactly 10 ns, which makes "simulated time advances in exact step
/// multiples" integer arithmetic rather than an approximation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SimTime {
    /// Whole nanoseconds since the run began.
    nanos: u64,
}

impl SimTime {
    /// The instant the run begins.
    pub const ZERO: Self = Self { nanos: 0 };

    /// Convert seconds to a time, truncating to whole nanoseconds.
    ///
    /// # Panics
    ///
    /// Panics when `secs` is negative, NaN, or infinite.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        assert!(secs >= 0.0, "SimTime cannot be negative");
        assert!(secs.is_finite(), "SimTime must be finite");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = (secs * NANOS_PER_SEC) as u64;
        Self { nanos }
    }

    /// Exact construction from a nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Seconds as `f64`, for display and closed-form comparison.
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let nanos = self.nanos as f64;
        nanos / NANOS_PER_SEC
    }

    /// The raw nanosecond count.
    #[must_use]
    pub const fn as_nanos(&self) -> u64 {
        self.nanos
    }

    /// Advance by a nanosecond count.
    #[must_use]
    pub const fn add_nanos(self, nanos: u64) -> Self {
        Self {
            nanos: self.nanos + nanos,
        }
    }

    /// Step backwards, saturating at the run start.
    #[must_use]
    pub const fn saturating_sub_nanos(self, nanos: u64) -> Self {
        Self {
            nanos: self.nanos.saturating_sub(nanos),
        }
    }
}

impl std::ops::Add for SimTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            nanos: self.nanos + rhs.nanos,
        }
    }
}

impl std::ops::Sub for SimTime {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            nanos: self.nanos.saturating_sub(rhs.nanos),
        }
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.9}s", self.as_secs_f64())
    }
}

/// External view of the body: what a renderer needs to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Horizontal displacement from the launch point in meters.
    pub x: f64,
    /// Height above ground in meters.
    pub y: f64,
    /// Body radius in meters.
    pub radius: f64,
}

/// Main simulation context.
///
/// Couples the pieces behind one mutable handle:
/// - Catch-up clock and frame pacing
/// - Force-law integration
/// - Finite-state guarding (stop-on-error)
/// - Crossing-event detection
///
/// A fresh instance starts paused; call [`Simulation::start`] before
/// feeding frames.
pub struct Simulation {
    /// Configuration the run was built from.
    config: SimConfig,
    /// The projectile.
    body: Body,
    /// Active force law.
    model: Box<dyn MotionModel + Send + Sync>,
    /// Catch-up clock.
    clock: SimClock,
    /// Per-frame substep bounding.
    pacer: FramePacer,
    /// Stop-on-error guard.
    guard: FiniteGuard,
    /// One-shot crossing events.
    detector: EventDetector,
    /// Whether frames advance elapsed time.
    running: bool,
    /// Base-10 exponent of the time-scale multiplier.
    log_time_scale: f64,
    /// Effective multiplier, `10^log_time_scale`.
    time_scale: f64,
}

impl Simulation {
    /// Create a simulation from configuration.
    ///
    /// The body starts at `(0, height)` moving with the configured launch
    /// velocity; the instance starts paused with counters at zero.
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails or the launch
    /// parameters cannot form a valid body.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate_all()?;

        let launch = config.launch;
        let params = BodyParams::new(
            launch.mass,
            launch.radius,
            launch.drag_coefficient,
            launch.fluid_density,
        )?;
        let body = Body::launched(params, launch.speed, launch.angle, launch.height);
        let model = motion::build_model(config.motion, launch.gravity);
        let clock = SimClock::new(config.dt());
        let pacer = FramePacer::new(config.pacing.max_substeps_per_frame);
        let detector = EventDetector::new(launch.height);
        let initial_log10 = config.time_scale.initial_log10;

        let mut sim = Self {
            config,
            body,
            model,
            clock,
            pacer,
            guard: FiniteGuard::new(),
            detector,
            running: false,
            log_time_scale: 0.0,
            time_scale: 1.0,
        };
        sim.set_time_scale(initial_log10);
        Ok(sim)
    }

    /// Begin (or resume) advancing elapsed time.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze elapsed-time accumulation.
    ///
    /// All counters and event records are preserved; a later
    /// [`Simulation::start`] resumes exactly where the run left off.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Whether frames currently advance time.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Set the time-scale from a base-10 exponent.
    ///
    /// The effective multiplier is `10^log10`; the exponent is clamped to
    /// [`MIN_LOG_TIME_SCALE`]..=[`MAX_LOG_TIME_SCALE`]. Non-finite input
    /// is ignored, keeping the previous scale.
    pub fn set_time_scale(&mut self, log10: f64) {
        if !log10.is_finite() {
            warn!("ignoring non-finite time-scale exponent {log10}");
            return;
        }
        let clamped = log10.clamp(MIN_LOG_TIME_SCALE, MAX_LOG_TIME_SCALE);
        self.log_time_scale = clamped;
        self.time_scale = 10f64.powf(clamped);
    }

    /// Advance one external frame of wall time.
    ///
    /// Accumulates `frame_dt × time-scale` onto the elapsed counter, then
    /// drains owed fixed steps under the substep cap. While paused this is
    /// a no-op returning an idle report. Once the body has crossed below
    /// ground it stops integrating and rests in place, while simulated
    /// time continues to advance.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `frame_dt` is negative or non-finite
    /// - The force law degenerates (zero-speed drag)
    /// - Integration produces a non-finite position or velocity
    pub fn step_frame(&mut self, frame_dt: f64) -> SimResult<FrameReport> {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return Err(SimError::config(format!(
                "frame delta must be finite and non-negative, got {frame_dt}"
            )));
        }
        if !self.running {
            return Ok(FrameReport::idle());
        }

        self.clock
            .advance_elapsed(frame_dt * self.time_scale * NANOS_PER_SEC);

        let Self {
            body,
            model,
            clock,
            pacer,
            guard,
            detector,
            ..
        } = self;
        let dt = clock.timestep_secs();

        pacer.run_catchup(clock, |now| {
            // A grounded body rests where it crossed; the detector still
            // observes so a same-step launch-height return is recorded.
            if body.position().y >= 0.0 {
                model.advance(body, dt)?;
                guard.check(body)?;
            }
            detector.observe(body, now);
            Ok(())
        })
    }

    /// Snapshot of the body for external collaborators.
    #[must_use]
    pub fn body_state(&self) -> BodyState {
        let position = self.body.position();
        BodyState {
            x: position.x,
            y: position.y,
            radius: self.body.params().radius(),
        }
    }

    /// Crossing-event record: per-event status plus deltas once both fired.
    #[must_use]
    pub fn event_log(&self) -> EventLog {
        self.detector.log()
    }

    /// Scaled elapsed time in seconds.
    #[must_use]
    pub fn elapsed_time(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    /// Simulated time integrated so far (exact multiple of the timestep).
    #[must_use]
    pub const fn simulated_time(&self) -> SimTime {
        self.clock.simulated()
    }

    /// Number of fixed steps consumed so far.
    #[must_use]
    pub const fn step_count(&self) -> u64 {
        self.clock.step_count()
    }

    /// Current time-scale multiplier.
    #[must_use]
    pub const fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Current time-scale exponent.
    #[must_use]
    pub const fn log_time_scale(&self) -> f64 {
        self.log_time_scale
    }

    /// Whether the body has come to rest below ground level.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.body.position().y < 0.0
    }

    /// The projectile's full state.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Configuration the run was built from.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("body", &self.body)
            .field("motion", &self.config.motion)
            .field("clock", &self.clock)
            .field("running", &self.running)
            .field("log_time_scale", &self.log_time_scale)
            .finish_non_exhaustive()
    }
}
