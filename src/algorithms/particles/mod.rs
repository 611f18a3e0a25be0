/// [`Particle`] type, a single candidate solution.
pub mod particle;
pub use particle::Particle;

/// [`Swarm`] type, the particle swarm optimizer.
pub mod swarm;
pub use swarm::Swarm;

/// [`SwarmStatus`] type for the swarm's convergence bookkeeping.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use crate::traits::{Coordinates, SwarmObserver};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{ops::ControlFlow, sync::Arc};

/// A [`SwarmObserver`] which stores the swarm particles' history as well as the history of best
/// positions and points of interest.
#[derive(Serialize, Deserialize, Clone)]
pub struct TrackingSwarmObserver<C> {
    /// The history of the swarm particles
    pub history: Vec<Vec<Particle<C>>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<C>,
    /// The history of the point of interest
    pub poi_history: Vec<C>,
}

impl<C> Default for TrackingSwarmObserver<C> {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            best_history: Vec::new(),
            poi_history: Vec::new(),
        }
    }
}

impl<C> TrackingSwarmObserver<C> {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<C: Coordinates> SwarmObserver<C> for TrackingSwarmObserver<C> {
    fn callback(&mut self, _round: usize, swarm: &Swarm<C>) -> ControlFlow<()> {
        self.history.push(swarm.particles().to_vec());
        self.best_history.push(swarm.best_position().clone());
        self.poi_history.push(swarm.point_of_interest().clone());
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector2d;

    #[test]
    fn test_tracking_observer_records_each_callback() {
        let mut swarm = Swarm::new(Vector2d::from([10.0, 10.0]), Vector2d::from([1.0, 1.0]))
            .with_seed(3)
            .with_point_of_interest(Vector2d::from([5.0, 5.0]));
        for _ in 0..4 {
            swarm.add_particle().unwrap();
        }
        swarm.prepare().unwrap();
        let tracker = TrackingSwarmObserver::<Vector2d>::build();
        for round in 1..=3 {
            swarm.recalculate().unwrap();
            let _ = tracker.write().callback(round, &swarm);
        }
        let tracker = tracker.read();
        assert_eq!(tracker.history.len(), 3);
        assert!(tracker.history.iter().all(|particles| particles.len() == 4));
        assert_eq!(tracker.best_history.last(), Some(swarm.best_position()));
        assert_eq!(tracker.poi_history[0], Vector2d::from([5.0, 5.0]));
    }
}
