//! Autonomous anomaly detection for the integration loop.
//!
//! The guard runs after every fixed step and stops the line the moment a
//! non-finite value appears in the body state, so a single bad step can
//! never propagate NaN through the rest of the run. The returned error
//! names the exact field that went bad, which is what makes the root
//! cause findable.

use crate::engine::body::Body;
use crate::error::{SimError, SimResult};

/// Per-step finite-value guard.
///
/// Stateless; kept as a struct so the check site reads as a named stage
/// of the step pipeline rather than a loose function.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiniteGuard;

impl FiniteGuard {
    /// Create a guard.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check every mutable scalar of the body for NaN/Inf.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonFiniteValue`] naming the first offending
    /// field.
    pub fn check(&self, body: &Body) -> SimResult<()> {
        let position = body.position();
        let velocity = body.velocity();

        if !position.x.is_finite() {
            return Err(SimError::non_finite("position.x"));
        }
        if !position.y.is_finite() {
            return Err(SimError::non_finite("position.y"));
        }
        if !velocity.x.is_finite() {
            return Err(SimError::non_finite("velocity.x"));
        }
        if !velocity.y.is_finite() {
            return Err(SimError::non_finite("velocity.y"));
        }

        Ok(())
    }
}
