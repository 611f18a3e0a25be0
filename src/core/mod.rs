/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal)
pub mod abort_signal;
/// [`SwarmConfig`] type holding the swarm's tunable parameters.
pub mod config;
/// [`Driver`] type which advances a swarm in real time.
pub mod driver;
/// [`SwarmError`] type for everything that can go wrong.
pub mod error;
/// Random sampling helpers and the warning switch.
pub mod utils;
/// [`Vector`] type for positions and velocities.
pub mod vector;

pub use abort_signal::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use config::{PersonalBestUpdate, SwarmConfig};
pub use driver::Driver;
pub use error::SwarmError;
pub use vector::{Vector, Vector2, Vector2d, Vector2f, Vector2i, Vector3};
