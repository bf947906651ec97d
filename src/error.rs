//! Error types for lanzar.
//!
//! Every fallible operation returns `Result<T, SimError>` instead of
//! panicking; numerical degeneracies are detected before they can turn
//! into NaN propagation.

use thiserror::Error;

/// Result type alias for lanzar operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all lanzar operations.
#[derive(Debug, Error)]
pub enum SimError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter, rejected at construction.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was rejected.
        message: String,
    },

    /// Config document failed to parse.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Declarative range validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Numerical Faults =====
    /// Velocity magnitude too degenerate to normalize for the drag model.
    #[error("Degenerate velocity: |v| = {speed:.6e} cannot be normalized for drag")]
    DegenerateVelocity {
        /// Velocity magnitude at the failed step.
        speed: f64,
    },

    /// NaN or Inf appeared in integrated state.
    #[error("Non-finite value detected at {location}")]
    NonFiniteValue {
        /// Field that went non-finite, e.g. `velocity.y`.
        location: String,
    },

    // ===== I/O Errors =====
    /// Filesystem failure while loading a config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Build a configuration error from any message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a non-finite-value error naming the offending field.
    #[must_use]
    pub fn non_finite(location: impl Into<String>) -> Self {
        Self::NonFiniteValue {
            location: location.into(),
        }
    }

    /// Wrap a plain message as an I/O failure.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error is a numerical fault (requires immediate stop).
    #[must_use]
    pub const fn is_numerical(&self) -> bool {
        matches!(
            self,
            Self::DegenerateVelocity { .. } | Self::NonFiniteValue { .. }
        )
    }
}
