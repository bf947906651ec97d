//! Height-crossing event detection.
//!
//! Two one-shot, edge-triggered events observed after every fixed step:
//! ground crossing (first step with y < 0) and launch-height return
//! (first step with y below the initial launch height). Detection is
//! purely observational: it never mutates the body or the motion model,
//! and the firing order is whatever the trajectory produces.

use log::info;
use serde::{Deserialize, Serialize};

use crate::engine::body::Body;
use crate::engine::SimTime;

/// One-shot edge-triggered crossing event.
///
/// The transition `Pending -> Fired` happens at most once per run; the
/// recorded time and position never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrossingEvent {
    /// The monitored threshold has not been crossed yet.
    Pending,
    /// Crossed; records the instant and horizontal position.
    Fired {
        /// Simulated time of the step on which the crossing was observed.
        time: SimTime,
        /// Horizontal position at that step, in meters.
        x: f64,
    },
}

impl CrossingEvent {
    /// Whether the event has fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        matches!(self, Self::Fired { .. })
    }

    /// Recorded simulated time, if fired.
    #[must_use]
    pub const fn time(&self) -> Option<SimTime> {
        match self {
            Self::Pending => None,
            Self::Fired { time, .. } => Some(*time),
        }
    }

    /// Recorded horizontal position, if fired.
    #[must_use]
    pub const fn x(&self) -> Option<f64> {
        match self {
            Self::Pending => None,
            Self::Fired { x, .. } => Some(*x),
        }
    }

    /// Fire on the first observation where `crossed` holds. Returns true
    /// only on the transition itself.
    fn fire_if(&mut self, crossed: bool, time: SimTime, x: f64) -> bool {
        if crossed && !self.has_fired() {
            *self = Self::Fired { time, x };
            true
        } else {
            false
        }
    }
}

/// Observes body height across steps and drives the two crossing events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventDetector {
    /// Launch height threshold for the return event.
    launch_height: f64,
    ground: CrossingEvent,
    launch_return: CrossingEvent,
}

impl EventDetector {
    /// Create a detector with both events pending.
    #[must_use]
    pub const fn new(launch_height: f64) -> Self {
        Self {
            launch_height,
            ground: CrossingEvent::Pending,
            launch_return: CrossingEvent::Pending,
        }
    }

    /// Inspect the body after a step at the given simulated time.
    ///
    /// Both predicates use strict `<`: resting exactly on a threshold does
    /// not fire.
    pub fn observe(&mut self, body: &Body, simulated: SimTime) {
        let position = body.position();

        if self
            .ground
            .fire_if(position.y < 0.0, simulated, position.x)
        {
            info!("ground crossing at t={simulated}, x={:.6} m", position.x);
        }

        if self.launch_return.fire_if(
            position.y < self.launch_height,
            simulated,
            position.x,
        ) {
            info!(
                "returned below launch height at t={simulated}, x={:.6} m",
                position.x
            );
        }
    }

    /// Ground-crossing event state.
    #[must_use]
    pub const fn ground(&self) -> CrossingEvent {
        self.ground
    }

    /// Launch-height-return event state.
    #[must_use]
    pub const fn launch_return(&self) -> CrossingEvent {
        self.launch_return
    }

    /// Threshold used by the return event.
    #[must_use]
    pub const fn launch_height(&self) -> f64 {
        self.launch_height
    }

    /// Read-only snapshot for display and reporting.
    #[must_use]
    pub fn log(&self) -> EventLog {
        let delta = match (self.ground, self.launch_return) {
            (
                CrossingEvent::Fired {
                    time: ground_time,
                    x: ground_x,
                },
                CrossingEvent::Fired {
                    time: return_time,
                    x: return_x,
                },
            ) => Some((
                ground_time.as_secs_f64() - return_time.as_secs_f64(),
                ground_x - return_x,
            )),
            _ => None,
        };

        EventLog {
            ground_fired: self.ground.has_fired(),
            ground_time: self.ground.time().map(|t| t.as_secs_f64()),
            ground_x: self.ground.x(),
            launch_return_fired: self.launch_return.has_fired(),
            launch_return_time: self.launch_return.time().map(|t| t.as_secs_f64()),
            launch_return_x: self.launch_return.x(),
            delta_time: delta.map(|(dt, _)| dt),
            delta_x: delta.map(|(_, dx)| dx),
        }
    }
}

/// Snapshot of the event state; times in seconds.
///
/// The deltas are the differences ground − launch-return, present only
/// once both events have fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    /// Whether the ground crossing has fired.
    pub ground_fired: bool,
    /// Simulated time of ground crossing, seconds.
    pub ground_time: Option<f64>,
    /// Horizontal position at ground crossing, meters.
    pub ground_x: Option<f64>,
    /// Whether the launch-height return has fired.
    pub launch_return_fired: bool,
    /// Simulated time of launch-height return, seconds.
    pub launch_return_time: Option<f64>,
    /// Horizontal position at launch-height return, meters.
    pub launch_return_x: Option<f64>,
    /// Time between the two crossings, seconds.
    pub delta_time: Option<f64>,
    /// Horizontal displacement between the two crossings, meters.
    pub delta_x: Option<f64>,
}
