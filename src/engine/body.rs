//! Projectile body state.
//!
//! A [`Body`] carries the two mutable kinematic fields (position,
//! velocity) and the immutable [`BodyParams`] fixed at construction.
//! Degenerate parameters are rejected up front so the integration loop
//! never has to re-check them.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::engine::vec2::Vec2;
use crate::error::{SimError, SimResult};

/// Immutable physical parameters, validated at construction.
///
/// The cross-section area is derived from the radius (π·r²) once and
/// stored; it is never recomputed or mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    mass: f64,
    radius: f64,
    area: f64,
    drag_coefficient: f64,
    fluid_density: f64,
}

impl BodyParams {
    /// Create validated body parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if mass or radius is not strictly
    /// positive, if the drag coefficient or fluid density is negative, or
    /// if any value is non-finite.
    pub fn new(
        mass: f64,
        radius: f64,
        drag_coefficient: f64,
        fluid_density: f64,
    ) -> SimResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::config(format!(
                "mass must be finite and positive, got {mass}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::config(format!(
                "radius must be finite and positive, got {radius}"
            )));
        }
        if !drag_coefficient.is_finite() || drag_coefficient < 0.0 {
            return Err(SimError::config(format!(
                "drag coefficient must be finite and non-negative, got {drag_coefficient}"
            )));
        }
        if !fluid_density.is_finite() || fluid_density < 0.0 {
            return Err(SimError::config(format!(
                "fluid density must be finite and non-negative, got {fluid_density}"
            )));
        }

        Ok(Self {
            mass,
            radius,
            area: radius * radius * PI,
            drag_coefficient,
            fluid_density,
        })
    }

    /// Body mass in kilograms.
    #[must_use]
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Body radius in meters.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Cross-section area in square meters (π·r², derived at construction).
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Dimensionless drag coefficient.
    #[must_use]
    pub const fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// Fluid density in kg/m³.
    #[must_use]
    pub const fn fluid_density(&self) -> f64 {
        self.fluid_density
    }
}

/// A single projectile.
///
/// Position and velocity mutate every integration step; the parameters
/// never change for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    params: BodyParams,
}

impl Body {
    /// Create a body at an explicit position and velocity.
    #[must_use]
    pub const fn new(params: BodyParams, position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            params,
        }
    }

    /// Build the initial state of a launched body: at (0, height), moving
    /// with `speed` at elevation `angle` (radians above horizontal).
    #[must_use]
    pub fn launched(params: BodyParams, speed: f64, angle: f64, height: f64) -> Self {
        let velocity = Vec2::new(speed * angle.cos(), speed * angle.sin());
        Self::new(params, Vec2::new(0.0, height), velocity)
    }

    /// Current position in meters.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity in m/s.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Immutable physical parameters.
    #[must_use]
    pub const fn params(&self) -> &BodyParams {
        &self.params
    }

    /// Velocity magnitude in m/s.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Overwrite the position.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Overwrite the velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Check that position and velocity are finite.
    #[must_use]
    pub fn all_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
