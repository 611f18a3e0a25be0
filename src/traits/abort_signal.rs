/// A trait for abort signals.
/// This trait is used by the [`Driver`](crate::core::Driver) to check if the user has requested
/// to stop the simulation.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the simulation.
    fn is_aborted(&self) -> bool;
    /// Abort the simulation. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}
