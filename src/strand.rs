//! Hair strand integrator: an open chain of particles hanging from an anchor.
//!
//! Free particles are advanced one at a time in ascending index order. Each one
//! reads the value its predecessor was given earlier in the same sweep, so the
//! sweep order is part of the simulation result.

use crate::config::{IntegrationMode, StrandParams, PARTICLE_RADIUS};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::sphere::{self, CollisionSphere};
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// One hair strand. Particle 0 is the anchor and only moves through [`Strand::set_anchor`].
#[derive(Clone, Debug)]
pub struct Strand<F: Float> {
    particles: AllocVec<Particle<F>>,
    initial_positions: AllocVec<Vec3<F>>,
    params: StrandParams<F>,
    mode: IntegrationMode,
    particle_radius: F,
}

impl<F: Float> Strand<F> {
    /// Build a strand at rest from world positions and per-particle render offsets.
    pub fn try_new(
        positions: &[Vec3<F>],
        offsets: &[Vec3<F>],
        params: StrandParams<F>,
        mode: IntegrationMode,
    ) -> Result<Self, PhysicsError> {
        if positions.len() < 2 {
            return Err(PhysicsError::InsufficientParticles { count: positions.len() });
        }
        if offsets.len() != positions.len() {
            return Err(PhysicsError::MismatchedOffsets {
                positions: positions.len(),
                offsets: offsets.len(),
            });
        }

        let particles = positions
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(i, (&pos, &offset))| Particle::new(pos, offset, i))
            .collect();

        Ok(Strand {
            particles,
            initial_positions: positions.to_vec(),
            params,
            mode,
            particle_radius: F::from_f32(PARTICLE_RADIUS),
        })
    }

    /// Build a strand at rest.
    ///
    /// # Panics
    /// If fewer than 2 positions are given or `offsets` has a different length.
    pub fn new(
        positions: &[Vec3<F>],
        offsets: &[Vec3<F>],
        params: StrandParams<F>,
        mode: IntegrationMode,
    ) -> Self {
        match Self::try_new(positions, offsets, params, mode) {
            Ok(strand) => strand,
            Err(e) => panic!("invalid strand: {}", e),
        }
    }

    /// Build a strand from a card strip laid out as vertex pairs `(2i, 2i + 1)`.
    ///
    /// Particle `i` sits at the midpoint of its pair, with offset `v[2i + 1] - v[2i]`.
    pub fn from_vertex_pairs(
        vertices: &[Vec3<F>],
        params: StrandParams<F>,
        mode: IntegrationMode,
    ) -> Result<Self, PhysicsError> {
        if vertices.len() % 2 != 0 {
            return Err(PhysicsError::OddVertexCount { count: vertices.len() });
        }
        let (positions, offsets): (AllocVec<_>, AllocVec<_>) = vertices
            .chunks_exact(2)
            .map(|pair| (pair[0].lerp(pair[1], F::half()), pair[1] - pair[0]))
            .unzip();
        Self::try_new(&positions, &offsets, params, mode)
    }

    /// Override the particle footprint used against collision spheres.
    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Move the anchor. Its velocity is left alone.
    pub fn set_anchor(&mut self, position: Vec3<F>) {
        self.particles[0].position = position;
    }

    pub fn anchor(&self) -> Vec3<F> {
        self.particles[0].position
    }

    /// Replace the parameters, effective from the next step.
    pub fn set_params(&mut self, params: StrandParams<F>) {
        if params != self.params {
            log::debug!("strand params changed: {:?}", params);
        }
        self.params = params;
    }

    /// Like [`Strand::set_params`], rejecting parameters that cannot be simulated.
    pub fn try_set_params(&mut self, params: StrandParams<F>) -> Result<(), PhysicsError> {
        if let Err(e) = params.validate() {
            log::warn!("rejected strand params {:?}: {}", params, e);
            return Err(e);
        }
        self.set_params(params);
        Ok(())
    }

    /// Switch the force law, effective from the next step.
    pub fn change_mode(&mut self, mode: IntegrationMode) {
        if mode != self.mode {
            log::debug!("strand mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Advance every free particle by `dt`, resolving contacts against `spheres`.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        spheres: &[CollisionSphere<F>],
        observer: &mut O,
    ) {
        self.advance(0, dt, spheres, observer);
        observer.on_step_complete();
    }

    /// One sweep over particles `1..N`, reporting to `observer` as strand `tag`.
    pub(crate) fn advance<O: StepObserver>(
        &mut self,
        tag: usize,
        dt: F,
        spheres: &[CollisionSphere<F>],
        observer: &mut O,
    ) {
        let inv_mass = F::one() / self.params.mass;

        for i in 1..self.particles.len() {
            let mut force = match self.mode {
                IntegrationMode::MassSpring => self.mass_spring_force(i),
                IntegrationMode::Inextensible => self.inextensible_force(i),
            };
            force.y = force.y + self.params.weight();

            let p = &mut self.particles[i];
            p.velocity = p.velocity + force.scale(inv_mass * dt);
            let proposed = p.position + p.velocity.scale(dt);

            match sphere::resolve(spheres, proposed, self.particle_radius) {
                Some(contact) => {
                    log::trace!("particle {} of strand {} hit sphere {}", i, tag, contact.sphere);
                    p.position = contact.position;
                    p.velocity = Vec3::zero();
                    observer.on_collision(tag, i, contact.sphere);
                }
                None => p.position = proposed,
            }
            observer.on_particle_integrated(tag, i);
        }

        observer.on_strand_complete(tag);
    }

    /// Spring and damping forces on particle `i` of a zero-rest-length spring chain.
    ///
    /// Damping acts on each particle's own absolute velocity, not on the relative
    /// velocity across the link.
    fn mass_spring_force(&self, i: usize) -> Vec3<F> {
        let k = self.params.stiffness;
        let c = self.params.damping;
        let cur = &self.particles[i];
        let prev = &self.particles[i - 1];

        let spring_prev = (cur.position - prev.position).scale(-k);
        let damping_prev = cur.velocity.scale(c);

        let (spring_next, damping_next) = match self.particles.get(i + 1) {
            Some(next) => (
                (next.position - cur.position).scale(-k),
                next.velocity.scale(c),
            ),
            None => (Vec3::zero(), Vec3::zero()),
        };

        spring_prev - damping_prev - spring_next + damping_next
    }

    /// Spring toward the rest distance plus damping on particle `i`.
    fn inextensible_force(&self, i: usize) -> Vec3<F> {
        let cur = &self.particles[i];
        let link = cur.position - self.particles[i - 1].position;
        let dist = link.length();
        let rest = self.params.rest_distance;

        let excess = if dist != F::zero() {
            link.scale((dist - rest) / dist)
        } else {
            Vec3::zero()
        };

        let spring = if dist > rest {
            excess.scale(-self.params.stiffness)
        } else {
            self.slack_support(link)
        };

        spring - cur.velocity.scale(self.params.damping)
    }

    /// Force carried by a slack link.
    ///
    /// Only a link pointing exactly straight up (cosine with world up equal to 1,
    /// compared exactly) holds the particle's weight; any other slack link
    /// carries nothing. In `f32` a link tilted by less than about one part in
    /// 10^4 already normalizes to exactly vertical and is held.
    fn slack_support(&self, link: Vec3<F>) -> Vec3<F> {
        let dir = link.normalize();
        if Vec3::unit_y().dot(dir) == F::one() {
            let weight = Vec3::new(F::zero(), self.params.weight(), F::zero());
            dir.scale(-weight.dot(dir))
        } else {
            Vec3::zero()
        }
    }

    /// Put every free particle back at its initial position, at rest, and apply `params`.
    ///
    /// The anchor is left where it is; its owner re-anchors it.
    pub fn restart(&mut self, params: StrandParams<F>) {
        for (p, &initial) in self
            .particles
            .iter_mut()
            .zip(self.initial_positions.iter())
            .skip(1)
        {
            p.reset(initial);
        }
        self.params = params;
        log::debug!("strand restarted with {} particles", self.particles.len());
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Distance between each pair of consecutive particles.
    pub fn segment_lengths(&self) -> AllocVec<F> {
        self.particles
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .collect()
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    /// Mutable access to a free particle, for hosts that need to kick it.
    ///
    /// The anchor is only ever moved by [`Strand::set_anchor`], so index 0 is
    /// rejected with [`PhysicsError::AnchorNotMutable`].
    pub fn particle_mut(&mut self, index: usize) -> Result<&mut Particle<F>, PhysicsError> {
        if index == 0 {
            return Err(PhysicsError::AnchorNotMutable);
        }
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
    }

    pub fn initial_positions(&self) -> &[Vec3<F>] {
        &self.initial_positions
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false: a strand has at least two particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn params(&self) -> &StrandParams<F> {
        &self.params
    }

    pub fn mode(&self) -> IntegrationMode {
        self.mode
    }

    pub fn particle_radius(&self) -> F {
        self.particle_radius
    }
}
