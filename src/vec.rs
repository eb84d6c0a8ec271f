//! Vector types and traits for strand physics.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Squared distance between two points.
    fn distance_sq(self, other: Self) -> Self::Scalar {
        (self - other).length_sq()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }
}

/// 3D vector. Y is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// World up, `(0, 1, 0)`.
    pub fn unit_y() -> Self { Vec3 { x: F::zero(), y: F::one(), z: F::zero() } }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec3::<f32>::zero();
        assert_eq!(v.normalize(), Vec3::zero());
    }

    #[test]
    fn normalize_power_of_two_is_exact() {
        // The inextensible slack branch compares a cosine with exactly 1.
        let n = Vec3::new(0.0f32, 0.25, 0.0).normalize();
        assert_eq!(n.dot(Vec3::unit_y()), 1.0);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(10.0f32, 10.0, -4.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
        assert!((mid.z + 2.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(1.0f32, 1.0, 1.0);
        let b = Vec3::new(4.0f32, 5.0, 1.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-5);
    }
}
