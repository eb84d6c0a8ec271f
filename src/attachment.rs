//! Strands rooted on a moving rigid body.
//!
//! A [`RigidAttachment`] owns a body-local vertex buffer, the body pose, the
//! strands rooted on its vertices and the collision spheres bound to it. Every
//! time the body moves its anchors are recomputed, and each [`step`] re-anchors
//! a strand right before integrating it.
//!
//! [`step`]: RigidAttachment::step

use crate::card::HairCard;
use crate::config::{IntegrationMode, StrandParams};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::sphere::CollisionSphere;
use crate::strand::Strand;
use crate::transform::{Pose, Rot3};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A rigid body carrying hair strands and collision spheres.
pub struct RigidAttachment<F: Float> {
    local_vertices: AllocVec<Vec3<F>>,
    pose: Pose<F>,
    initial_pose: Pose<F>,
    strands: AllocVec<Strand<F>>,
    /// Body vertex each strand is rooted on, parallel to `strands`.
    roots: AllocVec<usize>,
    spheres: AllocVec<CollisionSphere<F>>,
    /// Body-local sphere centers, parallel to `spheres`.
    sphere_locals: AllocVec<Vec3<F>>,
}

impl<F: Float> RigidAttachment<F> {
    pub fn new(local_vertices: AllocVec<Vec3<F>>, pose: Pose<F>) -> Self {
        RigidAttachment {
            local_vertices,
            pose,
            initial_pose: pose,
            strands: AllocVec::new(),
            roots: AllocVec::new(),
            spheres: AllocVec::new(),
            sphere_locals: AllocVec::new(),
        }
    }

    /// World position of body vertex `index` under the current pose.
    pub fn vertex_world(&self, index: usize) -> Result<Vec3<F>, PhysicsError> {
        self.local_vertices
            .get(index)
            .map(|&v| self.pose.to_world(v))
            .ok_or(PhysicsError::VertexOutOfBounds {
                index,
                count: self.local_vertices.len(),
            })
    }

    /// Root `strand` on body vertex `vertex`, snapping its anchor there.
    /// Returns the strand's index.
    pub fn attach(&mut self, vertex: usize, mut strand: Strand<F>) -> Result<usize, PhysicsError> {
        let anchor = self.vertex_world(vertex)?;
        strand.set_anchor(anchor);
        self.strands.push(strand);
        self.roots.push(vertex);
        Ok(self.strands.len() - 1)
    }

    /// Grow a card-shaped strand from body vertex `vertex` along `growth`.
    pub fn grow_strand(
        &mut self,
        vertex: usize,
        card: &HairCard<F>,
        growth: Vec3<F>,
        params: StrandParams<F>,
        mode: IntegrationMode,
    ) -> Result<usize, PhysicsError> {
        let root = self.vertex_world(vertex)?;
        let strand = card.build(root, growth, params, mode)?;
        self.attach(vertex, strand)
    }

    /// Bind a sphere, given in world space, to the body. Returns its index.
    pub fn add_collision_sphere(&mut self, center: Vec3<F>, radius: F) -> usize {
        self.spheres.push(CollisionSphere::new(center, radius));
        self.sphere_locals.push(self.pose.to_local(center));
        self.spheres.len() - 1
    }

    /// Move the body by `delta`.
    pub fn translate(&mut self, delta: Vec3<F>) {
        self.pose.translate(delta);
        self.sync();
    }

    /// Rotate the body about its origin.
    pub fn rotate(&mut self, axis: Vec3<F>, angle: F) {
        self.pose.rotate(Rot3::from_axis_angle(axis, angle));
        self.sync();
    }

    /// Rotate the body about the vertical axis through its origin.
    pub fn rotate_y(&mut self, angle: F) {
        self.pose.rotate(Rot3::from_rotation_y(angle));
        self.sync();
    }

    pub fn set_pose(&mut self, pose: Pose<F>) {
        self.pose = pose;
        self.sync();
    }

    /// Re-place spheres and anchors after a pose change.
    fn sync(&mut self) {
        for (sphere, &local) in self.spheres.iter_mut().zip(&self.sphere_locals) {
            sphere.set_center(self.pose.to_world(local));
        }
        self.update_anchors();
    }

    /// Recompute every strand's anchor from the current pose.
    pub fn update_anchors(&mut self) {
        for (strand, &root) in self.strands.iter_mut().zip(&self.roots) {
            strand.set_anchor(self.pose.to_world(self.local_vertices[root]));
        }
    }

    /// Advance every strand by `dt`. Each strand is re-anchored right before it
    /// is integrated against the shared sphere list.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        for (i, (strand, &root)) in self.strands.iter_mut().zip(&self.roots).enumerate() {
            strand.set_anchor(self.pose.to_world(self.local_vertices[root]));
            observer.on_anchor_moved(i);
            strand.advance(i, dt, &self.spheres, observer);
        }
        observer.on_step_complete();
    }

    /// Put the body, its spheres and its strands back where they started and
    /// apply `params` to every strand.
    pub fn restart(&mut self, params: StrandParams<F>) {
        self.pose = self.initial_pose;
        for (sphere, local) in self.spheres.iter_mut().zip(self.sphere_locals.iter_mut()) {
            sphere.restart();
            *local = self.pose.to_local(sphere.center);
        }
        self.update_anchors();
        for strand in self.strands.iter_mut() {
            strand.restart(params);
        }
        log::debug!("attachment restarted: {} strands, {} spheres", self.strands.len(), self.spheres.len());
    }

    /// Apply `params` to every strand.
    pub fn set_params(&mut self, params: StrandParams<F>) {
        for strand in self.strands.iter_mut() {
            strand.set_params(params);
        }
    }

    /// Validate once, then apply `params` to every strand.
    pub fn try_set_params(&mut self, params: StrandParams<F>) -> Result<(), PhysicsError> {
        if let Err(e) = params.validate() {
            log::warn!("rejected params for {} strands: {}", self.strands.len(), e);
            return Err(e);
        }
        self.set_params(params);
        Ok(())
    }

    /// Switch every strand's force law.
    pub fn change_mode(&mut self, mode: IntegrationMode) {
        for strand in self.strands.iter_mut() {
            strand.change_mode(mode);
        }
    }

    pub fn strand(&self, index: usize) -> Result<&Strand<F>, PhysicsError> {
        self.strands.get(index).ok_or(PhysicsError::StrandOutOfBounds {
            index,
            count: self.strands.len(),
        })
    }

    pub fn strand_mut(&mut self, index: usize) -> Result<&mut Strand<F>, PhysicsError> {
        let count = self.strands.len();
        self.strands
            .get_mut(index)
            .ok_or(PhysicsError::StrandOutOfBounds { index, count })
    }

    /// Where strand `index` is anchored under the current pose.
    pub fn anchor_world(&self, index: usize) -> Result<Vec3<F>, PhysicsError> {
        let root = *self.roots.get(index).ok_or(PhysicsError::StrandOutOfBounds {
            index,
            count: self.roots.len(),
        })?;
        self.vertex_world(root)
    }

    pub fn strands(&self) -> &[Strand<F>] {
        &self.strands
    }

    pub fn spheres(&self) -> &[CollisionSphere<F>] {
        &self.spheres
    }

    pub fn pose(&self) -> &Pose<F> {
        &self.pose
    }

    pub fn strand_count(&self) -> usize {
        self.strands.len()
    }
}
