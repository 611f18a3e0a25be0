use std::{ops::ControlFlow, sync::Arc};

use parking_lot::RwLock;

use crate::{algorithms::particles::Swarm, traits::Coordinates};

/// A trait which holds a [`callback`](`SwarmObserver::callback`) function that is invoked by the
/// [`Driver`](crate::core::Driver) after every optimization round.
pub trait SwarmObserver<C: Coordinates> {
    /// A function that is called after every round with the freshly recalculated [`Swarm`]. If it
    /// returns [`ControlFlow::Break`], [`Driver::run`](crate::core::Driver::run) stops.
    fn callback(&mut self, round: usize, swarm: &Swarm<C>) -> ControlFlow<()>;
}

/// A debugging observer which prints out the round number and the full swarm dump after every
/// round.
///
/// # Usage:
///
/// ```rust
/// use poiswarm::prelude::*;
/// use poiswarm::traits::observer::DebugObserver;
///
/// let mut swarm = Swarm::new(Vector2d::from([10.0, 10.0]), Vector2d::from([1.0, 1.0]))
///     .with_seed(7);
/// swarm.add_particle().unwrap();
/// let mut driver = Driver::new(swarm).setup(|d| d.add_observer(DebugObserver::build()));
/// driver.run(2).unwrap();
/// // ^ This will print the swarm after each round
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<C: Coordinates> SwarmObserver<C> for DebugObserver {
    fn callback(&mut self, round: usize, swarm: &Swarm<C>) -> ControlFlow<()> {
        println!("Round: {}\n{}", round, swarm);
        ControlFlow::Continue(())
    }
}
