//! Sphere obstacles and the contact response used by strands.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// A sphere obstacle. It can be moved between steps but lives for the whole simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionSphere<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
    initial_center: Vec3<F>,
}

/// Where a particle ends up after hitting a sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    /// Index of the sphere that was hit, in list order.
    pub sphere: usize,
    /// Projected position on the inflated sphere surface.
    pub position: Vec3<F>,
}

impl<F: Float> CollisionSphere<F> {
    pub fn new(center: Vec3<F>, radius: F) -> Self {
        CollisionSphere { center, radius, initial_center: center }
    }

    pub fn set_center(&mut self, center: Vec3<F>) {
        self.center = center;
    }

    pub fn translate(&mut self, delta: Vec3<F>) {
        self.center = self.center + delta;
    }

    /// Move back to the center given at construction.
    pub fn restart(&mut self) {
        self.center = self.initial_center;
    }

    pub fn initial_center(&self) -> Vec3<F> {
        self.initial_center
    }

    /// Strict overlap test against a particle of the given radius.
    pub fn overlaps(&self, point: Vec3<F>, particle_radius: F) -> bool {
        let reach = self.radius + particle_radius;
        point.distance_sq(self.center) < reach * reach
    }

    /// Project `point` onto the sphere surface inflated by `particle_radius`.
    ///
    /// A point sitting exactly on the center has no direction to leave along and
    /// is pushed out along world up.
    pub fn push_out(&self, point: Vec3<F>, particle_radius: F) -> Vec3<F> {
        let mut normal = (point - self.center).normalize();
        if normal == Vec3::zero() {
            normal = Vec3::unit_y();
        }
        self.center + normal.scale(self.radius + particle_radius)
    }
}

/// Resolve a proposed particle position against `spheres`.
///
/// The first overlapping sphere in list order wins, even if a later one is
/// penetrated deeper. Returns `None` when the position is free.
pub fn resolve<F: Float>(
    spheres: &[CollisionSphere<F>],
    proposed: Vec3<F>,
    particle_radius: F,
) -> Option<Contact<F>> {
    spheres
        .iter()
        .position(|s| s.overlaps(proposed, particle_radius))
        .map(|i| Contact {
            sphere: i,
            position: spheres[i].push_out(proposed, particle_radius),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_never_collides() {
        let spheres: [CollisionSphere<f32>; 0] = [];
        assert!(resolve(&spheres, Vec3::zero(), 0.01).is_none());
    }

    #[test]
    fn surface_is_not_inside() {
        let s = CollisionSphere::new(Vec3::zero(), 1.0f32);
        assert!(!s.overlaps(Vec3::new(1.5, 0.0, 0.0), 0.5));
        assert!(s.overlaps(Vec3::new(1.4, 0.0, 0.0), 0.5));
    }

    #[test]
    fn push_out_lands_on_inflated_surface() {
        let s = CollisionSphere::new(Vec3::new(1.0f32, 0.0, 0.0), 1.0);
        let p = s.push_out(Vec3::new(1.0, 0.3, 0.4), 0.25);
        assert!((p.distance(s.center) - 1.25).abs() < 1e-6);
        assert!((p.y - 0.75).abs() < 1e-6);
        assert!((p.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_direction_goes_up() {
        let s = CollisionSphere::new(Vec3::new(0.0f32, 2.0, 0.0), 0.5);
        let p = s.push_out(s.center, 0.0);
        assert_eq!(p, Vec3::new(0.0, 2.5, 0.0));
    }

    #[test]
    fn first_match_wins() {
        let spheres = [
            CollisionSphere::new(Vec3::new(0.5f32, 0.0, 0.0), 0.6),
            CollisionSphere::new(Vec3::zero(), 2.0),
        ];
        let c = resolve(&spheres, Vec3::new(0.1, 0.0, 0.0), 0.0).unwrap();
        assert_eq!(c.sphere, 0);
        assert!((c.position.x - (0.5 - 0.6)).abs() < 1e-6);
    }

    #[test]
    fn restart_returns_to_initial_center() {
        let mut s = CollisionSphere::new(Vec3::new(1.0f32, 2.0, 3.0), 0.5);
        s.translate(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(s.center, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.initial_center(), Vec3::new(1.0, 2.0, 3.0));
        s.restart();
        assert_eq!(s.center, Vec3::new(1.0, 2.0, 3.0));
    }
}
