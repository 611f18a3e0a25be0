use serde::{de::DeserializeOwned, Serialize};

/// A trait which holds the bookkeeping of an optimizer between rounds.
pub trait Status: Clone + Default + Serialize + DeserializeOwned {
    /// Resets the status to its default state.
    fn reset(&mut self);
    /// Returns the convergence flag.
    fn converged(&self) -> bool;
    /// Returns the current message.
    fn message(&self) -> &str;
    /// Sets the current message.
    fn update_message(&mut self, message: &str);
}
