use std::{
    fmt::{Debug, Display},
    ops::{Add, Mul, Neg, Sub},
};

use fastrand::Rng;

use crate::{core::SwarmError, Float};

/// The capabilities a coordinate type needs in order to be moved around by a
/// [`Swarm`](crate::algorithms::particles::Swarm).
///
/// Positions and velocities share the same type. [`Vector`](crate::core::Vector) is the provided
/// implementation, but any type with component-wise arithmetic, scalar scaling, a metric, and a
/// way to sample a random point in a box can be used.
pub trait Coordinates:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Float, Output = Self>
{
    /// The origin.
    fn zero() -> Self;
    /// The fixed number of components.
    fn dimension(&self) -> usize;
    /// The Euclidean norm.
    fn magnitude(&self) -> Float;
    /// The Euclidean distance between `a` and `b`.
    fn distance_between(a: &Self, b: &Self) -> Float {
        (a.clone() - b.clone()).magnitude()
    }
    /// Draw a point uniformly from the box `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if the box is empty along any axis.
    fn random(low: &Self, high: &Self, rng: &mut Rng) -> Result<Self, SwarmError>;
}
