//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting floating-point operations needed by the strand integrator.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
