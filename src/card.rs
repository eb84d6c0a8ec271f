//! Hair cards: flat two-vertex-wide strips that strands are built from.

use crate::config::{IntegrationMode, StrandParams};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::strand::Strand;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// Dimensions of a hair card.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HairCard<F: Float> {
    pub length: F,
    pub width: F,
    /// Number of segments along the length; the strand gets `segments + 1` particles.
    pub segments: usize,
}

impl<F: Float> Default for HairCard<F> {
    fn default() -> Self {
        HairCard {
            length: F::from_f32(0.1),
            width: F::from_f32(0.05),
            segments: 5,
        }
    }
}

impl<F: Float> HairCard<F> {
    /// Strip vertices for a card rooted at `root` and growing along `growth`.
    ///
    /// The width axis is taken perpendicular to `growth` and world up, or
    /// world X when `growth` is vertical.
    pub fn vertices(&self, root: Vec3<F>, growth: Vec3<F>) -> AllocVec<Vec3<F>> {
        let growth = growth.normalize();
        let mut side = growth.cross(Vec3::unit_y()).normalize();
        if side == Vec3::zero() {
            side = Vec3::new(F::one(), F::zero(), F::zero());
        }
        strip(root, growth, side, self.length, self.width, self.segments)
    }

    /// A strand built from this card.
    pub fn build(
        &self,
        root: Vec3<F>,
        growth: Vec3<F>,
        params: StrandParams<F>,
        mode: IntegrationMode,
    ) -> Result<Strand<F>, PhysicsError> {
        Strand::from_vertex_pairs(&self.vertices(root, growth), params, mode)
    }
}

/// World-space vertices of a card strip, two per row, row 0 centered on `root`.
///
/// Rows are spaced `length / segments` apart along `growth`; each pair spans
/// `width` along `side`. Both directions are expected to be unit length.
pub fn strip<F: Float>(
    root: Vec3<F>,
    growth: Vec3<F>,
    side: Vec3<F>,
    length: F,
    width: F,
    segments: usize,
) -> AllocVec<Vec3<F>> {
    let segments = segments.max(1);
    let step = length / F::from_f32(segments as f32);
    let half = side.scale(width * F::half());

    let mut vertices = AllocVec::with_capacity(2 * (segments + 1));
    let mut center = root;
    for _ in 0..=segments {
        vertices.push(center - half);
        vertices.push(center + half);
        center = center + growth.scale(step);
    }
    vertices
}
