//! Rigid transforms for bodies that carry strands.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use core::ops::Mul;

/// 3x3 rotation matrix, stored as rows.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rot3<F: Float> {
    rows: [Vec3<F>; 3],
}

impl<F: Float> Rot3<F> {
    pub fn identity() -> Self {
        let (o, z) = (F::one(), F::zero());
        Rot3 {
            rows: [Vec3::new(o, z, z), Vec3::new(z, o, z), Vec3::new(z, z, o)],
        }
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues). A zero axis gives identity.
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let a = axis.normalize();
        if a == Vec3::zero() {
            return Self::identity();
        }
        let (s, c) = (angle.sin(), angle.cos());
        let t = F::one() - c;
        Rot3 {
            rows: [
                Vec3::new(t * a.x * a.x + c, t * a.x * a.y - s * a.z, t * a.x * a.z + s * a.y),
                Vec3::new(t * a.x * a.y + s * a.z, t * a.y * a.y + c, t * a.y * a.z - s * a.x),
                Vec3::new(t * a.x * a.z - s * a.y, t * a.y * a.z + s * a.x, t * a.z * a.z + c),
            ],
        }
    }

    /// Rotation about world Y, counter-clockwise seen from above.
    pub fn from_rotation_y(angle: F) -> Self {
        Self::from_axis_angle(Vec3::unit_y(), angle)
    }

    pub fn transform(&self, v: Vec3<F>) -> Vec3<F> {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }

    /// Inverse of a rotation is its transpose.
    pub fn transpose(&self) -> Self {
        let [r0, r1, r2] = self.rows;
        Rot3 {
            rows: [
                Vec3::new(r0.x, r1.x, r2.x),
                Vec3::new(r0.y, r1.y, r2.y),
                Vec3::new(r0.z, r1.z, r2.z),
            ],
        }
    }
}

impl<F: Float> Mul for Rot3<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let cols = rhs.transpose().rows;
        let row = |r: Vec3<F>| Vec3::new(r.dot(cols[0]), r.dot(cols[1]), r.dot(cols[2]));
        Rot3 {
            rows: [row(self.rows[0]), row(self.rows[1]), row(self.rows[2])],
        }
    }
}

impl<F: Float> Default for Rot3<F> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation followed by translation: `world = rotation * local + translation`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose<F: Float> {
    pub translation: Vec3<F>,
    pub rotation: Rot3<F>,
}

impl<F: Float> Pose<F> {
    pub fn from_translation(translation: Vec3<F>) -> Self {
        Pose { translation, rotation: Rot3::identity() }
    }

    pub fn to_world(&self, local: Vec3<F>) -> Vec3<F> {
        self.rotation.transform(local) + self.translation
    }

    pub fn to_local(&self, world: Vec3<F>) -> Vec3<F> {
        self.rotation.transpose().transform(world - self.translation)
    }

    /// Rotate the body in place about its own origin.
    pub fn rotate(&mut self, rotation: Rot3<F>) {
        self.rotation = rotation * self.rotation;
    }

    pub fn translate(&mut self, delta: Vec3<F>) {
        self.translation = self.translation + delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f64>, b: Vec3<f64>) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn quarter_turn_about_y() {
        let r = Rot3::from_rotation_y(core::f64::consts::FRAC_PI_2);
        let v = r.transform(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(v, Vec3::new(0.0, 0.0, -1.0)), "{:?}", v);
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Rot3::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
        let b = Rot3::from_rotation_y(-1.1);
        let v = Vec3::new(0.3, -0.4, 2.0);
        assert!(close((a * b).transform(v), a.transform(b.transform(v))));
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(Rot3::<f32>::from_axis_angle(Vec3::zero(), 1.0), Rot3::identity());
    }

    #[test]
    fn pose_round_trip() {
        let mut pose = Pose::from_translation(Vec3::new(1.0, 2.0, 3.0));
        pose.rotate(Rot3::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 0.4));
        let local = Vec3::new(-0.5, 0.25, 4.0);
        assert!(close(pose.to_local(pose.to_world(local)), local));
    }
}
