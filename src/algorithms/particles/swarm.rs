use std::fmt::Display;

use fastrand::Rng;

use crate::{
    algorithms::particles::{Particle, SwarmStatus},
    core::{utils::maybe_warn, utils::SampleFloat, PersonalBestUpdate, SwarmConfig, SwarmError},
    fitness_functions::EuclideanDistance,
    traits::{Coordinates, Fitness, Status, SwarmRenderer},
    Float,
};

/// A swarm of particles chasing a point of interest.
///
/// The swarm owns its particles, the search-space extent (`[0, max_coords)`), the velocity bound
/// (`±max_velocity`), the point of interest, the best position found so far, the fitness function
/// (Euclidean distance by default), and its own random number generator.
///
/// The intended call sequence is: add particles, [`prepare`](Swarm::prepare) once, then
/// [`recalculate`](Swarm::recalculate) once per round and [`update`](Swarm::update) as often as
/// the display needs it.
#[derive(Clone)]
pub struct Swarm<C: Coordinates> {
    particles: Vec<Particle<C>>,
    max_coords: C,
    max_velocity: C,
    point_of_interest: C,
    best_position: C,
    prepared: bool,
    config: SwarmConfig,
    fitness: Box<dyn Fitness<C>>,
    rng: Rng,
    status: SwarmStatus,
}

impl<C: Coordinates> Swarm<C> {
    /// Create an empty swarm. New random particles are placed in `[0, max_coords)` and start with
    /// a velocity in `[-max_velocity, max_velocity)`. The point of interest starts at the origin.
    pub fn new(max_coords: C, max_velocity: C) -> Self {
        Self {
            particles: Vec::new(),
            max_coords,
            max_velocity,
            point_of_interest: C::zero(),
            best_position: C::zero(),
            prepared: false,
            config: SwarmConfig::default(),
            fitness: Box::new(EuclideanDistance),
            rng: Rng::new(),
            status: SwarmStatus::default(),
        }
    }

    /// Use the given random number generator for all sampling.
    pub fn with_rng(mut self, rng: Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Reseed the swarm's random number generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng.seed(seed);
        self
    }

    /// Use the given [`Fitness`] function instead of the Euclidean distance.
    pub fn with_fitness<F: Fitness<C> + 'static>(mut self, fitness: F) -> Self {
        self.fitness = Box::new(fitness);
        self
    }

    /// Set the initial point of interest.
    pub fn with_point_of_interest(mut self, point_of_interest: C) -> Self {
        self.point_of_interest = point_of_interest;
        self
    }

    /// Convenience method to edit the [`SwarmConfig`].
    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut SwarmConfig) -> &mut SwarmConfig,
    {
        f(&mut self.config);
        self
    }

    /// The current [`SwarmConfig`].
    pub const fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Add a particle at a random position.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if `max_coords` or `max_velocity` has a
    /// non-positive component.
    pub fn add_particle(&mut self) -> Result<(), SwarmError> {
        let particle = Particle::new_random(&self.max_coords, &self.max_velocity, &mut self.rng)?;
        self.particles.push(particle);
        Ok(())
    }

    /// Add a particle at `position` with a random velocity.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if `max_velocity` has a non-positive component.
    pub fn add_particle_at(&mut self, position: C) -> Result<(), SwarmError> {
        let particle = Particle::new(position, &self.max_velocity, &mut self.rng)?;
        self.particles.push(particle);
        Ok(())
    }

    /// Set the inertia coefficient.
    pub fn set_inertia_coeff(&mut self, inertia: Float) {
        self.config.with_inertia(inertia);
    }

    /// Set the cognitive coefficient.
    pub fn set_cognitive_coeff(&mut self, cognitive: Float) {
        self.config.with_cognitive(cognitive);
    }

    /// Set the social coefficient.
    pub fn set_social_coeff(&mut self, social: Float) {
        self.config.with_social(social);
    }

    /// The inertia coefficient.
    pub const fn inertia_coeff(&self) -> Float {
        self.config.inertia
    }

    /// The cognitive coefficient.
    pub const fn cognitive_coeff(&self) -> Float {
        self.config.cognitive
    }

    /// The social coefficient.
    pub const fn social_coeff(&self) -> Float {
        self.config.social
    }

    /// Move the target. The best position is not re-evaluated until the next
    /// [`recalculate`](Swarm::recalculate).
    pub fn set_point_of_interest(&mut self, point_of_interest: C) {
        self.point_of_interest = point_of_interest;
    }

    /// The current target.
    pub const fn point_of_interest(&self) -> &C {
        &self.point_of_interest
    }

    /// The upper corner of the box random particles are placed in.
    pub const fn max_coords(&self) -> &C {
        &self.max_coords
    }

    /// The bound on initial particle velocities.
    pub const fn max_velocity(&self) -> &C {
        &self.max_velocity
    }

    /// The swarm's best position, as of the latest [`prepare`](Swarm::prepare) or
    /// [`recalculate`](Swarm::recalculate).
    pub const fn best_position(&self) -> &C {
        &self.best_position
    }

    /// The fitness of [`Swarm::best_position`] when it was last computed.
    pub const fn best_fitness(&self) -> Float {
        self.status.best_fitness
    }

    /// The particles in iteration order.
    pub fn particles(&self) -> &[Particle<C>] {
        &self.particles
    }

    /// The number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if the swarm has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The [`SwarmStatus`] bookkeeping.
    pub const fn status(&self) -> &SwarmStatus {
        &self.status
    }

    pub(crate) fn status_mut(&mut self) -> &mut SwarmStatus {
        &mut self.status
    }

    /// Scan all particles' current positions, starting from `start`, and return the fittest
    /// position, its fitness, and the number of evaluations spent. Ties keep the earlier value.
    fn scan_for_best(&self, start: C) -> (C, Float, usize) {
        let mut best_fitness = self.fitness.evaluate(&start, &self.point_of_interest);
        let mut best = start;
        for particle in &self.particles {
            let fx = self
                .fitness
                .evaluate(particle.current_position(), &self.point_of_interest);
            if fx < best_fitness {
                best = particle.current_position().clone();
                best_fitness = fx;
            }
        }
        (best, best_fitness, self.particles.len() + 1)
    }

    fn record_best(&mut self, best: C, best_fitness: Float, n_evals: usize) {
        self.best_position = best;
        self.status.best_fitness = best_fitness;
        self.status.n_f_evals += n_evals;
        self.status.converged = self
            .config
            .tolerance
            .is_some_and(|tolerance| best_fitness <= tolerance);
    }

    /// Find the initial best position among the particles.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::EmptySwarm`] if no particles have been added.
    pub fn prepare(&mut self) -> Result<(), SwarmError> {
        let start = self
            .particles
            .first()
            .ok_or(SwarmError::EmptySwarm)?
            .current_position()
            .clone();
        let (best, best_fitness, n_evals) = self.scan_for_best(start);
        self.record_best(best, best_fitness, n_evals);
        self.prepared = true;
        self.status.update_message("Prepared");
        Ok(())
    }

    /// Run one round of particle swarm optimization.
    ///
    /// Every particle is moved using the best position from before the round, then the best
    /// position is refreshed from the particles' new positions. A swarm which was never prepared
    /// is prepared first.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::EmptySwarm`] if no particles have been added.
    pub fn recalculate(&mut self) -> Result<(), SwarmError> {
        if self.particles.is_empty() {
            return Err(SwarmError::EmptySwarm);
        }
        if !self.prepared {
            maybe_warn("recalculating a swarm which was never prepared; preparing it now");
            self.prepare()?;
        }
        let SwarmConfig {
            inertia,
            cognitive,
            social,
            personal_best_update,
            ..
        } = self.config;
        let global_best = self.best_position.clone();
        let poi = &self.point_of_interest;
        let mut n_evals = 0;
        for particle in &mut self.particles {
            let r_cognitive = self.rng.float();
            let r_social = self.rng.float();
            let position = particle.current_position().clone();
            let velocity = particle.velocity().clone() * inertia
                + (particle.best_position().clone() - position.clone()) * cognitive * r_cognitive
                + (global_best.clone() - position.clone()) * social * r_social;
            let next_position = position.clone() + velocity.clone();

            let next_fitness = self.fitness.evaluate(&next_position, poi);
            let baseline = match personal_best_update {
                PersonalBestUpdate::AgainstCurrent => self.fitness.evaluate(&position, poi),
                PersonalBestUpdate::AgainstBest => {
                    self.fitness.evaluate(particle.best_position(), poi)
                }
            };
            n_evals += 2;
            if next_fitness < baseline {
                particle.set_best_position(next_position.clone());
            }
            particle.set_next_position(next_position);
            particle.set_velocity(velocity);
        }
        let (best, best_fitness, scan_evals) = self.scan_for_best(global_best);
        self.record_best(best, best_fitness, n_evals + scan_evals);
        self.status.n_rounds += 1;
        if self.status.converged {
            self.status.update_message("Converged");
        } else {
            self.status.update_message("Recalculated");
        }
        Ok(())
    }

    /// Interpolate every particle's display position for `elapsed_millis` into the current round.
    ///
    /// The fraction `elapsed_millis / round_duration_ms` is not clamped, so calling this past the
    /// end of a round extrapolates beyond the particles' current positions.
    pub fn update(&mut self, elapsed_millis: Float) {
        let fraction = elapsed_millis / self.config.round_duration_ms;
        for particle in &mut self.particles {
            particle.interpolate_display_position(fraction);
        }
    }

    /// Hand the point of interest and then every particle's display position and velocity to
    /// `renderer`.
    pub fn render<R: SwarmRenderer<C> + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_target(&self.point_of_interest);
        for particle in &self.particles {
            renderer.draw_particle(particle.display_position(), particle.velocity());
        }
    }
}

impl<C: Coordinates> Display for Swarm<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SWARM ({} particles)", self.particles.len())?;
        writeln!(f, "POI: {}", self.point_of_interest)?;
        writeln!(f, "BEST: {}", self.best_position)?;
        for (i, particle) in self.particles.iter().enumerate() {
            writeln!(f, "{} {}", i, particle)?;
        }
        Ok(())
    }
}
