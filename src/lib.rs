//! `poiswarm` is a small particle swarm optimizer which chases a movable target, the
//! *point of interest*. A [`Swarm`](algorithms::particles::Swarm) owns a population of
//! [`Particle`](algorithms::particles::Particle)s, each of which carries a position, a velocity,
//! and the best position it has found so far. Every optimization round moves the particles
//! according to the canonical PSO update rule and refreshes the swarm-wide best position.
//!
//! Between rounds the swarm can interpolate a *display position* for every particle, so that a
//! rendering front-end (which is not part of this crate) can draw smooth motion while the
//! optimizer only advances once per round.
//!
//! # Quick Start
//!
//! ```rust
//! use poiswarm::prelude::*;
//!
//! fn main() -> Result<(), SwarmError> {
//!     let mut swarm = Swarm::new(Vector2d::from([800.0, 600.0]), Vector2d::from([1.0, 1.0]))
//!         .with_seed(0);
//!     swarm.set_point_of_interest(Vector2d::from([400.0, 300.0]));
//!     for _ in 0..25 {
//!         swarm.add_particle()?;
//!     }
//!     swarm.prepare()?;
//!     for _ in 0..100 {
//!         swarm.recalculate()?;
//!     }
//!     println!("{}", swarm);
//!     Ok(())
//! }
//! ```
//!
//! The velocity of particle $`i`$ is updated as
//!
//! ```math
//! v_i^{t+1} = \omega v_i^t + c_1 r_1 (p_i^t - x_i^t) + c_2 r_2 (g^t - x_i^t)
//! ```
//!
//! where $`\omega`$ is the inertia coefficient, $`c_1`$ and $`c_2`$ are the cognitive and social
//! coefficients, $`r_1, r_2 \sim U[0, 1)`$ are drawn freshly for every particle in every round,
//! $`p_i`$ is the particle's best position and $`g`$ is the swarm's best position.
//!
//! # Driving a swarm in real time
//!
//! The [`Driver`](core::Driver) wraps the frame loop an interactive front-end would run: call
//! [`Driver::tick`](core::Driver::tick) once per frame with the time since the previous frame and
//! read back the particles' display positions. A new optimization round is started whenever the
//! configured round duration (one second by default) has elapsed.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the particle swarm optimizer
pub mod algorithms;
/// Module containing the core types: vectors, errors, configuration, and the driver
pub mod core;
/// Module containing standard fitness functions
pub mod fitness_functions;
/// Module containing the traits used across the crate
pub mod traits;

/// The floating-point type used for fitness values, coefficients, and scaling.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used for fitness values, coefficients, and scaling.
#[cfg(feature = "f32")]
pub type Float = f32;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::algorithms::particles::{Particle, Swarm, SwarmStatus};
    pub use crate::core::{
        Driver, SwarmConfig, SwarmError, Vector, Vector2, Vector2d, Vector2f, Vector2i, Vector3,
    };
    pub use crate::traits::{AbortSignal, Coordinates, Fitness, SwarmObserver, SwarmRenderer};
    pub use crate::Float;
}
