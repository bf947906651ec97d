//! Projectile launch scenario and flight helpers.
//!
//! Wraps a [`SimConfig`] with named variants of the reference tabletop
//! launch, closed-form drag-free predictions for cross-checking the
//! integrator, and a frame-driving loop that flies a body to ground.

use serde::{Deserialize, Serialize};

use crate::config::{MotionKind, SimConfig};
use crate::engine::{BodyState, EventLog, Simulation};
use crate::error::SimResult;

/// A ready-to-run launch scenario.
///
/// The default is the reference tabletop launch: a table-tennis-ball
/// sized projectile leaving a desk edge at 45°, integrated with
/// quadratic drag.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchScenario {
    config: SimConfig,
}

impl LaunchScenario {
    /// Reference tabletop launch with quadratic drag.
    #[must_use]
    pub fn tabletop() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }

    /// Reference tabletop launch in vacuum (uniform acceleration only).
    #[must_use]
    pub fn tabletop_drag_free() -> Self {
        Self {
            config: SimConfig::builder()
                .motion(MotionKind::UniformAcceleration)
                .build(),
        }
    }

    /// Wrap an arbitrary configuration.
    #[must_use]
    pub const fn from_config(config: SimConfig) -> Self {
        Self { config }
    }

    /// The wrapped configuration.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Build a paused simulation for this scenario.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails validation.
    pub fn build(&self) -> SimResult<Simulation> {
        Simulation::new(self.config.clone())
    }

    /// Closed-form time to return to launch height, ignoring drag:
    /// `2·v·sin(θ)/g`. Meaningful only for positive gravity.
    #[must_use]
    pub fn drag_free_return_time(&self) -> f64 {
        let launch = &self.config.launch;
        2.0 * launch.speed * launch.angle.sin() / launch.gravity
    }

    /// Closed-form horizontal range at launch-height return, ignoring
    /// drag: `v²·sin(2θ)/g`.
    #[must_use]
    pub fn drag_free_return_range(&self) -> f64 {
        let launch = &self.config.launch;
        launch.speed * launch.speed * (2.0 * launch.angle).sin() / launch.gravity
    }

    /// Closed-form time to reach ground from launch height `h`, ignoring
    /// drag: `(v·sin(θ) + √((v·sin(θ))² + 2·g·h))/g`.
    #[must_use]
    pub fn drag_free_ground_time(&self) -> f64 {
        let launch = &self.config.launch;
        let vy = launch.speed * launch.angle.sin();
        (vy + (vy * vy + 2.0 * launch.gravity * launch.height).sqrt()) / launch.gravity
    }

    /// Closed-form horizontal distance at ground impact, ignoring drag.
    #[must_use]
    pub fn drag_free_ground_range(&self) -> f64 {
        let launch = &self.config.launch;
        launch.speed * launch.angle.cos() * self.drag_free_ground_time()
    }

    /// Closed-form apex height, ignoring drag: `h + (v·sin(θ))²/(2g)`.
    #[must_use]
    pub fn drag_free_apex_height(&self) -> f64 {
        let launch = &self.config.launch;
        let vy = launch.speed * launch.angle.sin();
        launch.height + vy * vy / (2.0 * launch.gravity)
    }
}

impl Default for LaunchScenario {
    fn default() -> Self {
        Self::tabletop()
    }
}

/// Frame-driving budget for [`run_flight`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightLimits {
    /// External frame delta in seconds.
    pub frame_dt: f64,
    /// Maximum number of frames before giving up.
    pub max_frames: u64,
}

impl Default for FlightLimits {
    /// 60 fps frames with a 10 000-frame budget.
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            max_frames: 10_000,
        }
    }
}

/// What a complete flight produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightReport {
    /// Crossing events recorded during the flight.
    pub events: EventLog,
    /// Fixed steps integrated.
    pub steps: u64,
    /// Simulated time reached, in seconds.
    pub simulated_secs: f64,
    /// External frames driven.
    pub frames: u64,
    /// Frames cut short by the substep cap.
    pub capped_frames: u64,
    /// Body state when the flight ended.
    pub final_state: BodyState,
}

/// Fly a scenario until the body reaches ground or the budget runs out.
///
/// Drives synthetic frames of `limits.frame_dt` wall seconds each. The
/// returned report's `events.ground_fired` distinguishes a landing from
/// an exhausted budget: an upward launch in zero gravity simply never
/// lands.
///
/// # Errors
///
/// Returns error if configuration validation or any integration step
/// fails.
pub fn run_flight(scenario: &LaunchScenario, limits: FlightLimits) -> SimResult<FlightReport> {
    let mut sim = scenario.build()?;
    sim.start();

    let mut frames = 0u64;
    let mut capped_frames = 0u64;

    while frames < limits.max_frames {
        let report = sim.step_frame(limits.frame_dt)?;
        frames += 1;
        if report.capped {
            capped_frames += 1;
        }
        // Ground crossing implies launch-height return for non-negative
        // launch heights, so one flag decides completion.
        if sim.event_log().ground_fired {
            break;
        }
    }

    Ok(FlightReport {
        events: sim.event_log(),
        steps: sim.step_count(),
        simulated_secs: sim.simulated_time().as_secs_f64(),
        frames,
        capped_frames,
        final_state: sim.body_state(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::LaunchConfig;

    /// Coarse timestep so flights finish quickly in debug builds.
    fn coarse(scenario: &LaunchScenario, dt: f64) -> LaunchScenario {
        let mut config = scenario.config().clone();
        config.timestep.dt = dt;
        LaunchScenario::from_config(config)
    }

    #[test]
    fn test_tabletop_uses_drag() {
        let scenario = LaunchScenario::tabletop();
        assert_eq!(scenario.config().motion, MotionKind::DragAugmented);
    }

    #[test]
    fn test_tabletop_drag_free_uses_uniform() {
        let scenario = LaunchScenario::tabletop_drag_free();
        assert_eq!(scenario.config().motion, MotionKind::UniformAcceleration);
    }

    #[test]
    fn test_reference_analytics() {
        let scenario = LaunchScenario::tabletop_drag_free();

        // 2·v·sin(θ)/g and v²·sin(2θ)/g for the reference launch
        assert!((scenario.drag_free_return_time() - 0.262_46).abs() < 1e-4);
        assert!((scenario.drag_free_return_range() - 0.337_77).abs() < 1e-4);

        // ground crossing is later and farther than launch-height return
        assert!(scenario.drag_free_ground_time() > scenario.drag_free_return_time());
        assert!(scenario.drag_free_ground_range() > scenario.drag_free_return_range());

        // apex sits above the launch height
        assert!(scenario.drag_free_apex_height() > scenario.config().launch.height);
    }

    #[test]
    fn test_drag_free_flight_matches_analytics() {
        let scenario = coarse(&LaunchScenario::tabletop_drag_free(), 1e-5);
        let report = run_flight(&scenario, FlightLimits::default()).unwrap();

        assert!(report.events.ground_fired);
        assert!(report.events.launch_return_fired);

        let ground_time = report.events.ground_time.unwrap();
        let ground_x = report.events.ground_x.unwrap();
        assert!((ground_time - scenario.drag_free_ground_time()).abs() < 1e-3);
        assert!((ground_x - scenario.drag_free_ground_range()).abs() < 1e-3);

        let return_time = report.events.launch_return_time.unwrap();
        let return_x = report.events.launch_return_x.unwrap();
        assert!((return_time - scenario.drag_free_return_time()).abs() < 1e-3);
        assert!((return_x - scenario.drag_free_return_range()).abs() < 1e-3);
    }

    #[test]
    fn test_drag_lands_short_of_vacuum() {
        let free = coarse(&LaunchScenario::tabletop_drag_free(), 1e-5);
        let dragged = coarse(&LaunchScenario::tabletop(), 1e-5);

        let free_report = run_flight(&free, FlightLimits::default()).unwrap();
        let drag_report = run_flight(&dragged, FlightLimits::default()).unwrap();

        let free_x = free_report.events.ground_x.unwrap();
        let drag_x = drag_report.events.ground_x.unwrap();
        assert!(
            drag_x < free_x,
            "drag range {drag_x} should trail vacuum range {free_x}"
        );
    }

    #[test]
    fn test_ground_follows_return() {
        let scenario = coarse(&LaunchScenario::tabletop(), 1e-5);
        let report = run_flight(&scenario, FlightLimits::default()).unwrap();

        let return_time = report.events.launch_return_time.unwrap();
        let ground_time = report.events.ground_time.unwrap();
        assert!(ground_time > return_time);

        let delta = report.events.delta_time.unwrap();
        assert!((delta - (ground_time - return_time)).abs() < 1e-12);
    }

    #[test]
    fn test_budget_exhaustion_reports_no_landing() {
        let scenario = coarse(&LaunchScenario::tabletop_drag_free(), 1e-5);
        let limits = FlightLimits {
            max_frames: 1,
            ..FlightLimits::default()
        };

        let report = run_flight(&scenario, limits).unwrap();
        assert_eq!(report.frames, 1);
        assert!(!report.events.ground_fired);
    }

    #[test]
    fn test_upward_zero_gravity_never_lands() {
        let launch = LaunchConfig {
            angle: std::f64::consts::FRAC_PI_2,
            gravity: 0.0,
            ..LaunchConfig::default()
        };
        let config = SimConfig::builder()
            .timestep(1e-4)
            .motion(MotionKind::UniformAcceleration)
            .launch(launch)
            .build();
        let scenario = LaunchScenario::from_config(config);

        let limits = FlightLimits {
            max_frames: 50,
            ..FlightLimits::default()
        };
        let report = run_flight(&scenario, limits).unwrap();

        assert!(!report.events.launch_return_fired);
        assert!(!report.events.ground_fired);
        assert!(report.final_state.y > 0.153);
    }

    #[test]
    fn test_flight_report_counts_frames_and_steps() {
        let scenario = coarse(&LaunchScenario::tabletop_drag_free(), 1e-5);
        let report = run_flight(&scenario, FlightLimits::default()).unwrap();

        assert!(report.frames > 0);
        assert!(report.steps > 0);
        assert!(report.simulated_secs > 0.0);
        assert_eq!(report.capped_frames, 0);
    }
}
