//! Simulation clock: scaled elapsed time vs. integrated simulated time.
//!
//! The clock keeps two counters. `elapsed` is the scaled real time the
//! simulation has been asked to reach, accumulated each external frame as
//! fractional nanoseconds. `simulated` is the time actually integrated so
//! far, held as whole nanoseconds and advanced only in exact multiples of
//! the fixed step. The catch-up contract is strict: a step is owed only
//! while `elapsed > simulated + step`.

use serde::{Deserialize, Serialize};

use crate::engine::SimTime;

/// Nanoseconds per second conversion factor.
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Fixed-step catch-up clock.
///
/// Invariant: `simulated <= elapsed` at every external observation point
/// (a consumed step never overshoots the strict catch-up condition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    /// Scaled elapsed time in nanoseconds (continuous, not step-quantized).
    elapsed_nanos: f64,
    /// Simulated time, always an exact multiple of the timestep.
    simulated: SimTime,
    /// Fixed timestep in nanoseconds.
    timestep_nanos: u64,
    /// Number of fixed steps consumed.
    step_count: u64,
}

impl SimClock {
    /// Create a clock with the given timestep in seconds.
    ///
    /// The timestep is quantized to whole nanoseconds (the reference step
    /// 1e-8 s is exactly 10 ns).
    ///
    /// # Panics
    ///
    /// Panics if the timestep is not positive and finite, or quantizes to
    /// zero nanoseconds. Configuration validation rejects such values
    /// before a clock is ever built.
    #[must_use]
    pub fn new(timestep_secs: f64) -> Self {
        assert!(
            timestep_secs.is_finite() && timestep_secs > 0.0,
            "timestep must be positive and finite"
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let timestep_nanos = (timestep_secs * NANOS_PER_SEC).round() as u64;
        assert!(timestep_nanos > 0, "timestep must be at least 1 ns");

        Self::from_nanos(timestep_nanos)
    }

    /// Create a clock with the timestep given directly in nanoseconds.
    #[must_use]
    pub const fn from_nanos(timestep_nanos: u64) -> Self {
        Self {
            elapsed_nanos: 0.0,
            simulated: SimTime::ZERO,
            timestep_nanos,
            step_count: 0,
        }
    }

    /// Accumulate scaled elapsed time for one external frame.
    ///
    /// `scaled_nanos` is frame-delta × time-scale, already converted to
    /// nanoseconds; negative values are ignored so elapsed time is
    /// monotonically non-decreasing.
    pub fn advance_elapsed(&mut self, scaled_nanos: f64) {
        if scaled_nanos > 0.0 {
            self.elapsed_nanos += scaled_nanos;
        }
    }

    /// Whether a fixed step is owed: `elapsed > simulated + step`.
    #[must_use]
    pub fn needs_step(&self) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let target = (self.simulated.as_nanos() + self.timestep_nanos) as f64;
        self.elapsed_nanos > target
    }

    /// Consume one fixed step, returning the new simulated time.
    pub fn consume_step(&mut self) -> SimTime {
        self.simulated = self.simulated.add_nanos(self.timestep_nanos);
        self.step_count += 1;
        self.simulated
    }

    /// Number of steps currently owed if the backlog were fully drained.
    #[must_use]
    pub fn backlog_steps(&self) -> u64 {
        #[allow(clippy::cast_precision_loss)]
        let gap =
            self.elapsed_nanos - self.simulated.as_nanos() as f64 - self.timestep_nanos as f64;
        if gap <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = (gap / self.timestep_nanos as f64).ceil() as u64;
            steps
        }
    }

    /// Scaled elapsed time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_nanos / NANOS_PER_SEC
    }

    /// Simulated time integrated so far.
    #[must_use]
    pub const fn simulated(&self) -> SimTime {
        self.simulated
    }

    /// Gap between requested and integrated time, in nanoseconds.
    #[must_use]
    pub fn lag_nanos(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let simulated = self.simulated.as_nanos() as f64;
        (self.elapsed_nanos - simulated).max(0.0)
    }

    /// Fixed timestep in nanoseconds.
    #[must_use]
    pub const fn timestep_nanos(&self) -> u64 {
        self.timestep_nanos
    }

    /// Fixed timestep in seconds.
    #[must_use]
    pub fn timestep_secs(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let nanos = self.timestep_nanos as f64;
        nanos / NANOS_PER_SEC
    }

    /// Number of fixed steps consumed so far.
    #[must_use]
    pub const fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for SimClock {
    /// Default clock uses the reference timestep of 10 ns (1e-8 s).
    fn default() -> Self {
        Self::from_nanos(10)
    }
}
