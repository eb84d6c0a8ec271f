//! Step observer trait for monitoring strand simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor integration (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations. `strand` is the strand's position in its
/// [`RigidAttachment`](crate::attachment::RigidAttachment), or 0 for a
/// strand stepped on its own.
pub trait StepObserver {
    /// Called after a strand's anchor has been moved by its rigid attachment.
    fn on_anchor_moved(&mut self, _strand: usize) {}

    /// Called after a free particle has been integrated (and possibly collided).
    fn on_particle_integrated(&mut self, _strand: usize, _particle: usize) {}

    /// Called when a particle's proposed position hit a collision sphere.
    fn on_collision(&mut self, _strand: usize, _particle: usize, _sphere: usize) {}

    /// Called after every free particle of a strand has been advanced.
    fn on_strand_complete(&mut self, _strand: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
