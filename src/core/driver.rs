use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    algorithms::particles::Swarm,
    core::{NopAbortSignal, SwarmError},
    traits::{AbortSignal, Coordinates, Status, SwarmObserver},
    Float,
};

/// Advances a [`Swarm`] the way an interactive front-end does: the display is interpolated every
/// frame and a new optimization round is run whenever a full round duration has elapsed.
///
/// ```rust
/// use poiswarm::prelude::*;
///
/// let mut swarm = Swarm::new(Vector2d::from([800.0, 600.0]), Vector2d::from([1.0, 1.0]))
///     .with_seed(0)
///     .with_point_of_interest(Vector2d::from([400.0, 300.0]));
/// for _ in 0..25 {
///     swarm.add_particle().unwrap();
/// }
/// let mut driver = Driver::new(swarm);
/// for _ in 0..120 {
///     // ~60 frames per second
///     driver.tick(16.0).unwrap();
///     for particle in driver.swarm.particles() {
///         let _ = (particle.display_position(), particle.velocity());
///     }
/// }
/// assert!(driver.rounds() >= 2);
/// ```
pub struct Driver<C: Coordinates> {
    /// The driven [`Swarm`]
    pub swarm: Swarm<C>,

    elapsed_ms: Float,
    round: usize,
    started: bool,
    observer_termination: bool,
    observers: Vec<Arc<RwLock<dyn SwarmObserver<C>>>>,
    abort_signal: Box<dyn AbortSignal>,
}

impl<C: Coordinates> Driver<C> {
    /// Creates a new [`Driver`] for the given [`Swarm`].
    pub fn new(swarm: Swarm<C>) -> Self {
        Self {
            swarm,
            elapsed_ms: 0.0,
            round: 0,
            started: false,
            observer_termination: false,
            observers: Vec::new(),
            abort_signal: Box::new(NopAbortSignal),
        }
    }

    /// Convenience method to use chainable methods to set up the [`Driver`].
    pub fn setup<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Set the [`AbortSignal`] checked by [`Driver::run`].
    pub fn with_abort_signal<A: AbortSignal + 'static>(&mut self, abort_signal: A) -> &mut Self {
        self.abort_signal = Box::new(abort_signal);
        self
    }

    /// Adds a single [`SwarmObserver`] to the [`Driver`].
    pub fn add_observer(&mut self, observer: Arc<RwLock<dyn SwarmObserver<C>>>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Move the swarm's target. Takes effect on the next round.
    pub fn set_point_of_interest(&mut self, point_of_interest: C) {
        self.swarm.set_point_of_interest(point_of_interest);
    }

    /// Milliseconds elapsed since the latest round.
    pub const fn elapsed_ms(&self) -> Float {
        self.elapsed_ms
    }

    /// The number of rounds run so far.
    pub const fn rounds(&self) -> usize {
        self.round
    }

    /// Returns `true` once an observer has asked to stop.
    pub const fn is_terminated(&self) -> bool {
        self.observer_termination
    }

    /// Prepare the swarm and run the first round so there is motion to interpolate.
    ///
    /// This is called implicitly by the first [`Driver::tick`] or [`Driver::run`].
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::EmptySwarm`] if the swarm has no particles.
    pub fn start(&mut self) -> Result<(), SwarmError> {
        self.swarm.prepare()?;
        self.started = true;
        self.elapsed_ms = 0.0;
        self.advance_round()
    }

    fn advance_round(&mut self) -> Result<(), SwarmError> {
        self.swarm.recalculate()?;
        self.round += 1;
        for observer in &self.observers {
            if observer
                .write()
                .callback(self.round, &self.swarm)
                .is_break()
            {
                self.observer_termination = true;
            }
        }
        Ok(())
    }

    /// Advance the clock by `delta_ms`, interpolate the display positions, and run a new round
    /// once the round duration has elapsed. Returns `true` if a round was run.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::EmptySwarm`] if the swarm has no particles.
    pub fn tick(&mut self, delta_ms: Float) -> Result<bool, SwarmError> {
        if !self.started {
            self.start()?;
        }
        self.elapsed_ms += delta_ms;
        self.swarm.update(self.elapsed_ms);
        if self.elapsed_ms >= self.swarm.config().round_duration_ms {
            self.advance_round()?;
            self.elapsed_ms = 0.0;
            return Ok(true);
        }
        Ok(false)
    }

    /// Run up to `max_rounds` rounds back to back, without any display interpolation.
    ///
    /// The first round run by an implicit [`Driver::start`] counts toward the limit.
    ///
    /// The loop stops early if the swarm converges, an observer returns
    /// [`ControlFlow::Break`](std::ops::ControlFlow::Break), or the abort signal fires. The swarm's
    /// [`Status::message`] records why it stopped.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::EmptySwarm`] if the swarm has no particles.
    pub fn run(&mut self, max_rounds: usize) -> Result<(), SwarmError> {
        self.abort_signal.reset();
        self.observer_termination = false;
        let mut current_round = 0;
        if max_rounds == 0 {
            return Ok(());
        }
        if !self.started {
            self.start()?;
            current_round += 1;
        }
        while current_round < max_rounds
            && !self.observer_termination
            && !self.swarm.status().converged()
            && !self.abort_signal.is_aborted()
        {
            self.advance_round()?;
            current_round += 1;
        }
        let status = self.swarm.status_mut();
        if self.abort_signal.is_aborted() {
            status.update_message("Abort signal received");
        } else if self.observer_termination {
            status.update_message("Stopped by observer");
        } else if !status.converged() {
            status.update_message("MAX ROUNDS");
        }
        Ok(())
    }
}
