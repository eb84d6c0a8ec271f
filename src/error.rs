//! Error types for strand and attachment operations.

use core::fmt;

/// Errors that can occur while building or configuring a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A strand needs an anchor and at least one free particle.
    InsufficientParticles { count: usize },
    /// Every particle needs exactly one render offset.
    MismatchedOffsets { positions: usize, offsets: usize },
    /// A card strip must be made of vertex pairs.
    OddVertexCount { count: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Rest distance must be non-negative and finite.
    InvalidRestDistance,
    /// Damping and stiffness must be non-negative, gravity finite.
    InvalidParameter,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// The anchor can only be moved with `Strand::set_anchor`.
    AnchorNotMutable,
    /// Rigid body vertex index is out of bounds.
    VertexOutOfBounds { index: usize, count: usize },
    /// Strand index is out of bounds.
    StrandOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InsufficientParticles { count } => {
                write!(f, "strand needs at least 2 particles (got {})", count)
            }
            PhysicsError::MismatchedOffsets { positions, offsets } => {
                write!(f, "{} positions but {} offsets", positions, offsets)
            }
            PhysicsError::OddVertexCount { count } => {
                write!(f, "card strip has an odd vertex count ({})", count)
            }
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRestDistance => {
                write!(f, "rest distance must be non-negative and finite")
            }
            PhysicsError::InvalidParameter => {
                write!(f, "damping and stiffness must be non-negative and finite, gravity finite")
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::AnchorNotMutable => {
                write!(f, "the anchor is moved with set_anchor, not particle_mut")
            }
            PhysicsError::VertexOutOfBounds { index, count } => {
                write!(f, "vertex index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::StrandOutOfBounds { index, count } => {
                write!(f, "strand index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
