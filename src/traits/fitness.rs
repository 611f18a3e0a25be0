use dyn_clone::DynClone;

use crate::Float;

/// A scoring function comparing a candidate position to the point of interest.
///
/// Lower values are better. Any `Fn(&C, &C) -> Float` closure which is [`Clone`] implements this
/// trait, so a plain function pointer can be handed to
/// [`Swarm::with_fitness`](crate::algorithms::particles::Swarm::with_fitness).
pub trait Fitness<C>: DynClone {
    /// Score `candidate` against `target`.
    fn evaluate(&self, candidate: &C, target: &C) -> Float;
}

dyn_clone::clone_trait_object!(<C> Fitness<C>);

impl<C, F> Fitness<C> for F
where
    F: Fn(&C, &C) -> Float + Clone,
{
    fn evaluate(&self, candidate: &C, target: &C) -> Float {
        self(candidate, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector2d;

    #[test]
    fn test_closure_is_fitness() {
        let f = |a: &Vector2d, b: &Vector2d| (a[0] - b[0]).abs();
        let boxed: Box<dyn Fitness<Vector2d>> = Box::new(f);
        let cloned = boxed.clone();
        let a = Vector2d::from([1.0, 100.0]);
        let b = Vector2d::from([4.0, -100.0]);
        assert_eq!(boxed.evaluate(&a, &b), 3.0);
        assert_eq!(cloned.evaluate(&a, &b), 3.0);
    }

    #[test]
    fn test_function_pointer_is_fitness() {
        let boxed: Box<dyn Fitness<Vector2d>> = Box::new(Vector2d::distance_between);
        let a = Vector2d::from([0.0, 0.0]);
        let b = Vector2d::from([3.0, 4.0]);
        assert_eq!(boxed.evaluate(&a, &b), 5.0);
    }
}
