use std::fmt::Display;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{core::SwarmError, traits::Coordinates, Float};

/// A single candidate solution in a [`Swarm`](super::Swarm).
///
/// A particle remembers exactly one step of history: the position it held before the latest
/// round (`prev_position`) and the position that round produced (`current_position`). The
/// `display_position` lies between the two and is only written by
/// [`Particle::interpolate_display_position`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle<C> {
    prev_position: C,
    current_position: C,
    display_position: C,
    best_position: C,
    velocity: C,
}

impl<C: Coordinates> Particle<C> {
    /// Create a particle at `position` with a random velocity drawn uniformly from
    /// `[-max_velocity, max_velocity)`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if any component of `max_velocity` is not positive.
    pub fn new(position: C, max_velocity: &C, rng: &mut Rng) -> Result<Self, SwarmError> {
        let velocity = C::random(&-max_velocity.clone(), max_velocity, rng)?;
        Ok(Self {
            prev_position: position.clone(),
            current_position: position.clone(),
            display_position: position.clone(),
            best_position: position,
            velocity,
        })
    }

    /// Create a particle at a random position in `[0, max_coords)` with a random velocity drawn
    /// uniformly from `[-max_velocity, max_velocity)`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if any component of `max_coords` or `max_velocity` is
    /// not positive.
    pub fn new_random(max_coords: &C, max_velocity: &C, rng: &mut Rng) -> Result<Self, SwarmError> {
        let position = C::random(&C::zero(), max_coords, rng)?;
        Self::new(position, max_velocity, rng)
    }

    /// The position before the latest call to [`Particle::set_next_position`].
    pub const fn prev_position(&self) -> &C {
        &self.prev_position
    }

    /// The position produced by the latest optimization round.
    pub const fn current_position(&self) -> &C {
        &self.current_position
    }

    /// The interpolated position for presentation.
    pub const fn display_position(&self) -> &C {
        &self.display_position
    }

    /// The best position this particle has recorded.
    pub const fn best_position(&self) -> &C {
        &self.best_position
    }

    /// The current velocity.
    pub const fn velocity(&self) -> &C {
        &self.velocity
    }

    /// Move to `position`, keeping the old current position as the previous one.
    pub fn set_next_position(&mut self, position: C) {
        self.prev_position = std::mem::replace(&mut self.current_position, position);
    }

    /// Record a new best position.
    pub fn set_best_position(&mut self, position: C) {
        self.best_position = position;
    }

    /// Replace the velocity.
    pub fn set_velocity(&mut self, velocity: C) {
        self.velocity = velocity;
    }

    /// Place the display position at `prev + (current - prev) * fraction`.
    ///
    /// No clamping is applied: fractions outside of `[0, 1]` extrapolate beyond the segment
    /// between the previous and current position.
    pub fn interpolate_display_position(&mut self, fraction: Float) {
        self.display_position = self.prev_position.clone()
            + (self.current_position.clone() - self.prev_position.clone()) * fraction;
    }
}

impl<C: Coordinates> Display for Particle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "p{} b{} v{}",
            self.current_position, self.best_position, self.velocity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Vector2d, Vector2i};
    use approx::assert_abs_diff_eq;

    fn particle_at(x: Float, y: Float) -> Particle<Vector2d> {
        let mut rng = Rng::with_seed(0);
        Particle::new(Vector2d::from([x, y]), &Vector2d::from([1.0, 1.0]), &mut rng).unwrap()
    }

    #[test]
    fn test_new_seeds_all_positions() {
        let p = particle_at(3.0, 4.0);
        let p0 = Vector2d::from([3.0, 4.0]);
        assert_eq!(p.prev_position(), &p0);
        assert_eq!(p.current_position(), &p0);
        assert_eq!(p.display_position(), &p0);
        assert_eq!(p.best_position(), &p0);
        for c in p.velocity().iter() {
            assert!((-1.0..1.0).contains(c));
        }
    }

    #[test]
    fn test_new_random_is_inside_box() {
        let mut rng = Rng::with_seed(5);
        let max_coords = Vector2d::from([800.0, 600.0]);
        let max_velocity = Vector2d::from([2.0, 2.0]);
        for _ in 0..500 {
            let p = Particle::new_random(&max_coords, &max_velocity, &mut rng).unwrap();
            assert!((0.0..800.0).contains(&p.current_position()[0]));
            assert!((0.0..600.0).contains(&p.current_position()[1]));
            assert!((-2.0..2.0).contains(&p.velocity()[0]));
            assert!((-2.0..2.0).contains(&p.velocity()[1]));
        }
    }

    #[test]
    fn test_zero_max_velocity_is_rejected() {
        let mut rng = Rng::with_seed(0);
        let result = Particle::new(
            Vector2d::from([1.0, 1.0]),
            &Vector2d::from([0.0, 1.0]),
            &mut rng,
        );
        assert!(matches!(
            result,
            Err(SwarmError::InvalidRange { axis: 0, .. })
        ));
    }

    #[test]
    fn test_only_one_step_of_history() {
        let mut p = particle_at(0.0, 0.0);
        let p1 = Vector2d::from([1.0, 1.0]);
        let p2 = Vector2d::from([2.0, -2.0]);
        p.set_next_position(p1);
        p.set_next_position(p2);
        assert_eq!(p.prev_position(), &p1);
        assert_eq!(p.current_position(), &p2);
    }

    #[test]
    fn test_interpolation_boundaries() {
        let mut p = particle_at(0.0, 0.0);
        p.set_next_position(Vector2d::from([2.0, 4.0]));
        p.set_next_position(Vector2d::from([4.0, 8.0]));
        p.interpolate_display_position(0.0);
        assert_eq!(p.display_position(), &Vector2d::from([2.0, 4.0]));
        p.interpolate_display_position(1.0);
        assert_eq!(p.display_position(), &Vector2d::from([4.0, 8.0]));
        p.interpolate_display_position(0.5);
        assert_abs_diff_eq!(p.display_position()[0], 3.0);
        assert_abs_diff_eq!(p.display_position()[1], 6.0);
    }

    #[test]
    fn test_interpolation_overshoots_without_clamping() {
        let mut p = particle_at(0.0, 0.0);
        p.set_next_position(Vector2d::from([10.0, 0.0]));
        p.interpolate_display_position(1.5);
        assert_abs_diff_eq!(p.display_position()[0], 15.0);
    }

    #[test]
    fn test_interpolation_does_not_touch_optimizer_state() {
        let mut p = particle_at(1.0, 1.0);
        p.set_next_position(Vector2d::from([3.0, 3.0]));
        let before = p.clone();
        p.interpolate_display_position(0.25);
        assert_eq!(p.prev_position(), before.prev_position());
        assert_eq!(p.current_position(), before.current_position());
        assert_eq!(p.best_position(), before.best_position());
        assert_eq!(p.velocity(), before.velocity());
    }

    #[test]
    fn test_integer_interpolation_truncates() {
        let mut rng = Rng::with_seed(0);
        let mut p =
            Particle::new(Vector2i::from([0, 0]), &Vector2i::from([1, 1]), &mut rng).unwrap();
        p.set_next_position(Vector2i::from([3, -3]));
        p.interpolate_display_position(0.5);
        assert_eq!(p.display_position(), &Vector2i::from([1, -1]));
    }

    #[test]
    fn test_display() {
        let mut p = particle_at(1.0, 2.0);
        p.set_velocity(Vector2d::from([0.5, -0.5]));
        p.set_best_position(Vector2d::from([0.0, 0.0]));
        assert_eq!(p.to_string(), "p(1,2) b(0,0) v(0.5,-0.5)");
    }
}
