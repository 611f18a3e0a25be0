/// Module containing the [`AbortSignal`] trait.
pub mod abort_signal;
/// Module containing the [`Coordinates`] trait.
pub mod coordinates;
/// Module containing the [`Fitness`] trait.
pub mod fitness;
/// Module containing the [`SwarmObserver`] trait and its implementations.
pub mod observer;
/// Module containing the [`SwarmRenderer`] trait.
pub mod renderer;
/// Module containing the [`Status`] trait.
pub mod status;

pub use abort_signal::AbortSignal;
pub use coordinates::Coordinates;
pub use fitness::Fitness;
pub use observer::SwarmObserver;
pub use renderer::SwarmRenderer;
pub use status::Status;
