//! Ambient background animation: moving particles with proximity connections.

mod particles;
mod renderer;

pub use particles::{link_opacity, Link, Particle, ParticleField, LINK_DISTANCE, PARTICLE_COUNT};
pub use renderer::paint;
