//! Motion models: pluggable force laws over a shared integration scheme.
//!
//! Both variants advance a [`Body`] with explicit (forward) Euler:
//! position from the pre-step velocity, then velocity from the pre-step
//! acceleration. The scheme accumulates error at large steps, which is why
//! the fixed step is deliberately tiny (see `TimestepConfig`).

use crate::config::MotionKind;
use crate::engine::body::Body;
use crate::engine::vec2::Vec2;
use crate::error::{SimError, SimResult};

/// A force law that advances a body by one fixed step.
///
/// Implementations supply the effective acceleration; the integration
/// scheme itself is shared and lives in the provided
/// [`MotionModel::advance`] method.
pub trait MotionModel {
    /// Effective acceleration on the body in its current state (m/s²).
    ///
    /// # Errors
    ///
    /// Returns an error when the body state violates a model precondition
    /// (e.g. zero velocity under the drag model).
    fn acceleration(&self, body: &Body) -> SimResult<Vec2>;

    /// Advance the body by one explicit-Euler step of `dt` seconds.
    ///
    /// Position is updated from the pre-step velocity, then velocity from
    /// the pre-step acceleration, in that order.
    ///
    /// # Errors
    ///
    /// Propagates [`acceleration`](MotionModel::acceleration) failures;
    /// the body is left untouched on error.
    fn advance(&self, body: &mut Body, dt: f64) -> SimResult<()> {
        let acceleration = self.acceleration(body)?;
        let position = body.position();
        let velocity = body.velocity();

        body.set_position(position + velocity * dt);
        body.set_velocity(velocity + acceleration * dt);
        Ok(())
    }
}

/// Constant acceleration supplied at construction (e.g. gravity only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformAcceleration {
    acceleration: Vec2,
}

impl UniformAcceleration {
    /// Create a model with a fixed acceleration vector.
    #[must_use]
    pub const fn new(acceleration: Vec2) -> Self {
        Self { acceleration }
    }

    /// Gravity-only field pulling straight down: (0, -g).
    #[must_use]
    pub const fn gravity(g: f64) -> Self {
        Self::new(Vec2::new(0.0, -g))
    }
}

impl MotionModel for UniformAcceleration {
    fn acceleration(&self, _body: &Body) -> SimResult<Vec2> {
        Ok(self.acceleration)
    }
}

/// Constant applied acceleration reduced by quadratic drag opposing the
/// current direction of travel.
///
/// The deceleration magnitude is 0.5·ρ·v²·A·Cd/m, evaluated at the
/// pre-step velocity. Normalizing the travel direction divides by the
/// speed, so a zero velocity is a model precondition violation, not a
/// quietly-produced NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAugmented {
    applied: Vec2,
}

impl DragAugmented {
    /// Create a model with a fixed externally-applied acceleration.
    #[must_use]
    pub const fn new(applied: Vec2) -> Self {
        Self { applied }
    }

    /// Drag model under gravity only: applied acceleration (0, -g).
    #[must_use]
    pub const fn gravity(g: f64) -> Self {
        Self::new(Vec2::new(0.0, -g))
    }
}

impl MotionModel for DragAugmented {
    fn acceleration(&self, body: &Body) -> SimResult<Vec2> {
        let velocity = body.velocity();
        let speed = velocity.magnitude();
        if speed <= 0.0 {
            return Err(SimError::DegenerateVelocity { speed });
        }

        let params = body.params();
        let deceleration = 0.5 * params.fluid_density() * speed * speed * params.area()
            * params.drag_coefficient()
            / params.mass();
        let direction = velocity * (1.0 / speed);

        Ok(self.applied - direction * deceleration)
    }
}

/// Build the boxed motion model selected by the configuration.
///
/// `gravity` is the magnitude of the downward applied acceleration.
#[must_use]
pub fn build_model(kind: MotionKind, gravity: f64) -> Box<dyn MotionModel + Send + Sync> {
    match kind {
        MotionKind::UniformAcceleration => Box::new(UniformAcceleration::gravity(gravity)),
        MotionKind::DragAugmented => Box::new(DragAugmented::gravity(gravity)),
    }
}
