use crate::{
    core::{vector::Component, Vector},
    traits::{Coordinates, Fitness},
    Float,
};

/// The Euclidean distance to the target, the default fitness of a
/// [`Swarm`](crate::algorithms::particles::Swarm).
///
/// ```math
/// f(\vec{x}, \vec{t}) = \sqrt{\sum_i (x_i - t_i)^2}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;
impl<C: Coordinates> Fitness<C> for EuclideanDistance {
    fn evaluate(&self, candidate: &C, target: &C) -> Float {
        C::distance_between(candidate, target)
    }
}

/// The squared Euclidean distance to the target. It ranks positions exactly like
/// [`EuclideanDistance`] but skips the square root.
///
/// ```math
/// f(\vec{x}, \vec{t}) = \sum_i (x_i - t_i)^2
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredDistance;
impl<C: Coordinates> Fitness<C> for SquaredDistance {
    fn evaluate(&self, candidate: &C, target: &C) -> Float {
        C::distance_between(candidate, target).powi(2)
    }
}

/// The taxicab distance to the target.
///
/// ```math
/// f(\vec{x}, \vec{t}) = \sum_i |x_i - t_i|
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;
impl<T: Component, const D: usize> Fitness<Vector<T, D>> for ManhattanDistance {
    fn evaluate(&self, candidate: &Vector<T, D>, target: &Vector<T, D>) -> Float {
        candidate
            .iter()
            .zip(target.iter())
            .map(|(c, t)| (c.to_float() - t.to_float()).abs())
            .sum()
    }
}
