//! Strand parameters and integration mode.

use crate::error::PhysicsError;
use crate::float::Float;

/// Default footprint of a particle when testing against collision spheres.
pub const PARTICLE_RADIUS: f32 = 0.01;

/// Force law used for the free particles of a strand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrationMode {
    /// Tri-diagonal damped spring chain with zero rest length.
    MassSpring,
    /// Strong spring toward the rest distance, slack when shorter.
    #[default]
    Inextensible,
}

/// Physical parameters shared by every particle of a strand.
///
/// # Builder Pattern
/// ```
/// use hairsim::config::StrandParams;
///
/// let params: StrandParams<f32> = StrandParams::new()
///     .with_damping(3.0)
///     .with_stiffness(100.0)
///     .with_gravity(-10.0)
///     .with_mass(0.02)
///     .with_rest_distance(0.01);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrandParams<F: Float> {
    /// Coefficient applied to each particle's absolute velocity. Default: 3.
    pub damping: F,
    /// Spring constant `k`. Default: 100.
    pub stiffness: F,
    /// Signed acceleration along world Y. Default: -10.
    pub gravity: F,
    /// Mass of every particle. Default: 0.02.
    pub mass: F,
    /// Target segment length `d` in inextensible mode. Default: 0.01.
    pub rest_distance: F,
}

impl<F: Float> StrandParams<F> {
    /// Create parameters with default values.
    pub fn new() -> Self {
        StrandParams {
            damping: F::from_f32(3.0),
            stiffness: F::from_f32(100.0),
            gravity: F::from_f32(-10.0),
            mass: F::from_f32(0.02),
            rest_distance: F::from_f32(0.01),
        }
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the spring constant.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set gravity along Y.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the particle mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the rest distance.
    pub fn with_rest_distance(mut self, rest_distance: F) -> Self {
        self.rest_distance = rest_distance;
        self
    }

    /// Check that the parameters describe a simulable strand.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.mass.is_finite() || self.mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.rest_distance.is_finite() || self.rest_distance < F::zero() {
            return Err(PhysicsError::InvalidRestDistance);
        }
        if !self.damping.is_finite()
            || !self.stiffness.is_finite()
            || !self.gravity.is_finite()
            || self.damping < F::zero()
            || self.stiffness < F::zero()
        {
            return Err(PhysicsError::InvalidParameter);
        }
        Ok(())
    }

    /// Weight of one particle along Y.
    pub fn weight(&self) -> F {
        self.mass * self.gravity
    }
}

impl<F: Float> Default for StrandParams<F> {
    fn default() -> Self {
        Self::new()
    }
}
