//! Planar vector type.
//!
//! Positions, velocities, and accelerations in the simulation plane are
//! all `Vec2` in SI units (meters, m/s, m/s²).

use serde::{Deserialize, Serialize};

/// 2D vector for positions, velocities, and accelerations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// Construct from components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// All-zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Magnitude squared.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Normalize to unit vector. The zero vector normalizes to zero;
    /// callers that cannot tolerate that must check the magnitude first.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < f64::EPSILON {
            Self::zero()
        } else {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        }
    }

    /// Scale by scalar.
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Check if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 5.0);

        // Addition
        let sum = v1 + v2;
        assert!((sum.x - 5.0).abs() < f64::EPSILON);
        assert!((sum.y - 7.0).abs() < f64::EPSILON);

        // Subtraction
        let diff = v2 - v1;
        assert!((diff.x - 3.0).abs() < f64::EPSILON);
        assert!((diff.y - 3.0).abs() < f64::EPSILON);

        // Dot product
        let dot = v1.dot(&v2);
        assert!((dot - 14.0).abs() < f64::EPSILON); // 1*4 + 2*5 = 14

        // Magnitude
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();

        assert!((n.magnitude() - 1.0).abs() < f64::EPSILON);
        assert!((n.x - 0.6).abs() < f64::EPSILON);
        assert!((n.y - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_normalize_zero() {
        let v = Vec2::zero();
        let n = v.normalize();
        assert!((n.x).abs() < f64::EPSILON);
        assert!((n.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_scale() {
        let v = Vec2::new(1.0, 2.0);
        let scaled = v.scale(2.0);
        assert!((scaled.x - 2.0).abs() < f64::EPSILON);
        assert!((scaled.y - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_mul_scalar() {
        let v = Vec2::new(1.0, 2.0);
        let scaled = v * 2.5;
        assert!((scaled.x - 2.5).abs() < f64::EPSILON);
        assert!((scaled.y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_neg() {
        let v = Vec2::new(1.0, -2.0);
        let neg = -v;
        assert!((neg.x - (-1.0)).abs() < f64::EPSILON);
        assert!((neg.y - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_is_finite() {
        let v1 = Vec2::new(1.0, 2.0);
        assert!(v1.is_finite());

        let v2 = Vec2::new(f64::INFINITY, 0.0);
        assert!(!v2.is_finite());

        let v3 = Vec2::new(0.0, f64::NAN);
        assert!(!v3.is_finite());
    }

    #[test]
    fn test_vec2_default() {
        let v = Vec2::default();
        assert!((v.x).abs() < f64::EPSILON);
        assert!((v.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vec2_partial_eq() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(1.0, 2.0);
        let v3 = Vec2::new(1.0, 3.0);
        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
    }

    #[test]
    fn test_vec2_magnitude_squared() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < f64::EPSILON);
    }
}
