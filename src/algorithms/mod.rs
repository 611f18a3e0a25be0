/// Module containing the particle swarm optimizer and its particles.
pub mod particles;
pub use particles::{Particle, Swarm};
