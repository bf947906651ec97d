//! YAML configuration with layered validation.
//!
//! Mistake-proofing happens in three layers: serde rejects unknown fields,
//! `validator` enforces declarative ranges, and `validate_semantic`
//! covers the cross-field constraints ranges cannot express. A config that
//! survives all three cannot produce a degenerate simulation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::pacing::DEFAULT_MAX_SUBSTEPS_PER_FRAME;
use crate::error::{SimError, SimResult};

/// The complete simulation configuration.
///
/// Loaded from YAML with full schema validation; every section has
/// defaults equal to the reference tabletop scenario, so `{}` is a valid
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Fixed-step integration settings.
    #[validate(nested)]
    #[serde(default)]
    pub timestep: TimestepConfig,

    /// Per-frame catch-up bounding.
    #[validate(nested)]
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Time-scale control.
    #[validate(nested)]
    #[serde(default)]
    pub time_scale: TimeScaleConfig,

    /// Force law selection.
    #[serde(default)]
    pub motion: MotionKind,

    /// Launch parameters and physical constants.
    #[validate(nested)]
    #[serde(default)]
    pub launch: LaunchConfig,
}

impl SimConfig {
    /// Read and validate a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, fails to parse, or
    /// fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error when parsing or validation rejects the document.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SimResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Start building a configuration programmatically.
    #[must_use]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Run schema validation plus semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate_all(&self) -> SimResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond declarative ranges.
    fn validate_semantic(&self) -> SimResult<()> {
        let launch = &self.launch;

        if !launch.mass.is_finite() || launch.mass <= 0.0 {
            return Err(SimError::config(format!(
                "launch mass must be finite and positive, got {}",
                launch.mass
            )));
        }
        if !launch.radius.is_finite() || launch.radius <= 0.0 {
            return Err(SimError::config(format!(
                "launch radius must be finite and positive, got {}",
                launch.radius
            )));
        }
        if !launch.angle.is_finite() {
            return Err(SimError::config("launch angle must be finite"));
        }
        if !launch.gravity.is_finite() {
            return Err(SimError::config("gravity must be finite"));
        }

        Ok(())
    }

    /// Shortcut for `timestep.dt`, the fixed step in seconds.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.timestep.dt
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: TimestepConfig::default(),
            pacing: PacingConfig::default(),
            time_scale: TimeScaleConfig::default(),
            motion: MotionKind::default(),
            launch: LaunchConfig::default(),
        }
    }
}

/// Builder over [`SimConfig`]; any section left unset keeps its default.
#[derive(Debug, Default)]
pub struct SimConfigBuilder {
    timestep: Option<f64>,
    max_substeps_per_frame: Option<u64>,
    initial_log10: Option<f64>,
    motion: Option<MotionKind>,
    launch: Option<LaunchConfig>,
}

impl SimConfigBuilder {
    /// Set the fixed timestep in seconds.
    #[must_use]
    pub const fn timestep(mut self, dt: f64) -> Self {
        self.timestep = Some(dt);
        self
    }

    /// Set the per-frame substep cap.
    #[must_use]
    pub const fn max_substeps_per_frame(mut self, cap: u64) -> Self {
        self.max_substeps_per_frame = Some(cap);
        self
    }

    /// Set the initial time-scale exponent.
    #[must_use]
    pub const fn initial_log10(mut self, log10: f64) -> Self {
        self.initial_log10 = Some(log10);
        self
    }

    /// Set the force law.
    #[must_use]
    pub const fn motion(mut self, kind: MotionKind) -> Self {
        self.motion = Some(kind);
        self
    }

    /// Set the launch parameters.
    #[must_use]
    pub const fn launch(mut self, launch: LaunchConfig) -> Self {
        self.launch = Some(launch);
        self
    }

    /// Finish, filling unset sections from the defaults.
    #[must_use]
    pub fn build(self) -> SimConfig {
        let mut config = SimConfig::default();

        if let Some(dt) = self.timestep {
            config.timestep.dt = dt;
        }
        if let Some(cap) = self.max_substeps_per_frame {
            config.pacing.max_substeps_per_frame = cap;
        }
        if let Some(log10) = self.initial_log10 {
            config.time_scale.initial_log10 = log10;
        }
        if let Some(motion) = self.motion {
            config.motion = motion;
        }
        if let Some(launch) = self.launch {
            config.launch = launch;
        }

        config
    }
}

/// Fixed-step integration settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct TimestepConfig {
    /// Fixed timestep in seconds; quantized to whole nanoseconds.
    #[validate(range(min = 0.000_000_001, max = 1.0))]
    #[serde(default = "default_timestep")]
    pub dt: f64,
}

const fn default_timestep() -> f64 {
    1e-8
}

impl Default for TimestepConfig {
    fn default() -> Self {
        Self {
            dt: default_timestep(),
        }
    }
}

/// Per-frame catch-up bounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PacingConfig {
    /// Hard cap on fixed steps integrated in one external frame.
    #[validate(range(min = 1))]
    #[serde(default = "default_max_substeps")]
    pub max_substeps_per_frame: u64,
}

const fn default_max_substeps() -> u64 {
    DEFAULT_MAX_SUBSTEPS_PER_FRAME
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            max_substeps_per_frame: default_max_substeps(),
        }
    }
}

/// Time-scale control settings.
///
/// The effective multiplier is 10^exponent; the exponent range matches
/// the slider the core was designed to sit behind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct TimeScaleConfig {
    /// Initial base-10 exponent of the time-scale multiplier.
    #[validate(range(min = -5.0, max = 5.0))]
    #[serde(default)]
    pub initial_log10: f64,
}

impl Default for TimeScaleConfig {
    fn default() -> Self {
        Self { initial_log10: 0.0 }
    }
}

/// Force law selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionKind {
    /// Constant acceleration only (e.g. gravity).
    UniformAcceleration,
    /// Constant acceleration reduced by quadratic drag.
    #[default]
    DragAugmented,
}

/// Launch parameters and physical constants.
///
/// Defaults describe the reference tabletop scenario: a table-tennis-ball
/// sized projectile launched at 45° from desk height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct LaunchConfig {
    /// Body radius in meters.
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Body mass in kilograms.
    #[serde(default = "default_mass")]
    pub mass: f64,

    /// Launch speed in m/s.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Launch elevation angle in radians above horizontal.
    #[serde(default = "default_angle")]
    pub angle: f64,

    /// Launch height above ground in meters.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_height")]
    pub height: f64,

    /// Magnitude of the downward gravitational acceleration in m/s².
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    /// Dimensionless drag coefficient (used only by the drag model).
    #[validate(range(min = 0.0))]
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64,

    /// Fluid density in kg/m³ (used only by the drag model).
    #[validate(range(min = 0.0))]
    #[serde(default = "default_fluid_density")]
    pub fluid_density: f64,
}

const fn default_radius() -> f64 {
    0.01295
}

const fn default_mass() -> f64 {
    0.0005
}

const fn default_speed() -> f64 {
    1.82
}

const fn default_angle() -> f64 {
    std::f64::consts::FRAC_PI_4
}

const fn default_height() -> f64 {
    0.153
}

const fn default_gravity() -> f64 {
    9.80665
}

const fn default_drag_coefficient() -> f64 {
    0.47
}

const fn default_fluid_density() -> f64 {
    1.293
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            mass: default_mass(),
            speed: default_speed(),
            angle: default_angle(),
            height: default_height(),
            gravity: default_gravity(),
            drag_coefficient: default_drag_coefficient(),
            fluid_density: default_fluid_density(),
        }
    }
}
