//! Real-time hair strand simulation for games.
//!
//! `hairsim` animates short hair strands: open chains of point masses hanging
//! from an anchor on a moving rigid body (a head), pulled by gravity, held
//! together by springs and pushed out of sphere obstacles.
//!
//! # Features
//!
//! - **Two force laws**: a damped mass-spring chain, or a pseudo-inextensible
//!   chain that springs toward a rest distance and goes slack below it
//! - **Sequential sweep**: each particle sees its predecessor's already-updated
//!   state from the same step
//! - **Sphere collisions**: first-match projection with inelastic contact
//! - **Rigid attachment**: strands re-anchored as the carrying body moves and rotates
//! - **Hair cards**: strands built from two-vertex-wide render strips
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod transform;
pub mod particle;
pub mod sphere;
pub mod strand;
pub mod card;
pub mod attachment;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec3};
pub use transform::{Pose, Rot3};
pub use particle::Particle;
pub use sphere::{CollisionSphere, Contact};
pub use strand::Strand;
pub use card::HairCard;
pub use attachment::RigidAttachment;
pub use config::{IntegrationMode, StrandParams, PARTICLE_RADIUS};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
