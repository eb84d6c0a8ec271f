//! Strand particles: explicit position and velocity.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// A point mass of a strand.
///
/// Mass lives in [`StrandParams`](crate::config::StrandParams) since it is shared
/// by the whole strand.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    /// World-space position.
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    /// Half-width vector of the render strip at this particle. Never simulated.
    pub offset: Vec3<F>,
    /// First of the two render vertices this particle maps to.
    pub index: usize,
}

impl<F: Float> Particle<F> {
    /// Particle `i` of a strand, at rest.
    pub fn new(position: Vec3<F>, offset: Vec3<F>, i: usize) -> Self {
        Particle {
            position,
            velocity: Vec3::zero(),
            offset,
            index: 2 * i,
        }
    }

    /// Put the particle back at `position` with zero velocity.
    pub fn reset(&mut self, position: Vec3<F>) {
        self.position = position;
        self.velocity = Vec3::zero();
    }

    /// The two render vertices `position ∓ offset / 2`, in world space.
    pub fn strip_vertices(&self) -> (Vec3<F>, Vec3<F>) {
        let half = self.offset.scale(F::half());
        (self.position - half, self.position + half)
    }
}
