//! Frame pacing: bounded catch-up.
//!
//! A single external frame at a high time-scale can owe an enormous number
//! of fixed steps. The pacer runs the catch-up loop with a hard per-frame
//! substep cap; whatever is still owed stays in the clock's
//! elapsed−simulated gap and is drained by subsequent frames, so no
//! simulated time is ever lost — only deferred.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::engine::clock::SimClock;
use crate::engine::SimTime;
use crate::error::SimResult;

/// Default substep cap per external frame.
///
/// At the reference 10 ns step this is 20 ms of simulated time per frame,
/// enough for real-time playback at 60 fps with headroom, while bounding
/// the worst case at extreme time-scales.
pub const DEFAULT_MAX_SUBSTEPS_PER_FRAME: u64 = 2_000_000;

/// What one external frame actually performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Fixed steps integrated this frame.
    pub substeps: u64,
    /// Simulated seconds advanced this frame.
    pub sim_time_advanced: f64,
    /// Whether the substep cap cut the frame short.
    pub capped: bool,
    /// Steps still owed when the frame ended (zero unless capped).
    pub backlog_steps: u64,
}

impl FrameReport {
    /// Report for a frame that performed no work (e.g. while paused).
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            substeps: 0,
            sim_time_advanced: 0.0,
            capped: false,
            backlog_steps: 0,
        }
    }
}

/// Runs the catch-up loop under a per-frame substep cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramePacer {
    max_substeps_per_frame: u64,
    /// Throttling is logged once per run, not once per frame.
    cap_logged: bool,
}

impl FramePacer {
    /// Create a pacer with the given per-frame substep cap.
    ///
    /// # Panics
    ///
    /// Panics if the cap is zero. Configuration validation rejects a zero
    /// cap before a pacer is ever built.
    #[must_use]
    pub fn new(max_substeps_per_frame: u64) -> Self {
        assert!(max_substeps_per_frame > 0, "substep cap must be positive");
        Self {
            max_substeps_per_frame,
            cap_logged: false,
        }
    }

    /// Configured substep cap.
    #[must_use]
    pub const fn max_substeps_per_frame(&self) -> u64 {
        self.max_substeps_per_frame
    }

    /// Drain the clock's backlog, invoking `step` once per consumed fixed
    /// step with the new simulated time, until caught up or capped.
    ///
    /// # Errors
    ///
    /// Propagates the first error from `step`; the clock keeps the steps
    /// consumed up to that point.
    pub fn run_catchup<F>(&mut self, clock: &mut SimClock, mut step: F) -> SimResult<FrameReport>
    where
        F: FnMut(SimTime) -> SimResult<()>,
    {
        let start = clock.simulated();
        let mut substeps = 0u64;

        while clock.needs_step() {
            if substeps >= self.max_substeps_per_frame {
                let backlog_steps = clock.backlog_steps();
                if !self.cap_logged {
                    warn!(
                        "frame capped at {} substeps; {backlog_steps} steps of backlog carried over",
                        self.max_substeps_per_frame
                    );
                    self.cap_logged = true;
                }
                return Ok(FrameReport {
                    substeps,
                    sim_time_advanced: (clock.simulated() - start).as_secs_f64(),
                    capped: true,
                    backlog_steps,
                });
            }

            let now = clock.consume_step();
            step(now)?;
            substeps += 1;
        }

        Ok(FrameReport {
            substeps,
            sim_time_advanced: (clock.simulated() - start).as_secs_f64(),
            capped: false,
            backlog_steps: 0,
        })
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUBSTEPS_PER_FRAME)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: a frame never performs more substeps than the cap.
        #[test]
        fn prop_cap_never_exceeded(
            cap in 1u64..500,
            scaled in 0.0f64..1e7,
        ) {
            let mut clock = SimClock::from_nanos(10);
            let mut pacer = FramePacer::new(cap);
            clock.advance_elapsed(scaled);

            let report = pacer.run_catchup(&mut clock, |_| Ok(()))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;

            prop_assert!(report.substeps <= cap);
        }

        /// Falsification: capping defers work but never loses it — the
        /// total steps across frames equals the initially-owed backlog.
        #[test]
        fn prop_capping_conserves_steps(
            cap in 1u64..100,
            scaled in 0.0f64..1e5,
        ) {
            let mut clock = SimClock::from_nanos(10);
            let mut pacer = FramePacer::new(cap);
            clock.advance_elapsed(scaled);

            let owed = clock.backlog_steps();
            let mut total = 0u64;
            loop {
                let report = pacer.run_catchup(&mut clock, |_| Ok(()))
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                total += report.substeps;
                if !report.capped {
                    break;
                }
            }

            prop_assert_eq!(total, owed);
        }
    }
}
