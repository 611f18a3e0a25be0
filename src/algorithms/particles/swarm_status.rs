use serde::{Deserialize, Serialize};

use crate::{traits::Status, Float};

/// Convergence bookkeeping for a [`Swarm`](super::Swarm), refreshed by every
/// [`prepare`](super::Swarm::prepare) and [`recalculate`](super::Swarm::recalculate).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmStatus {
    /// The number of completed optimization rounds
    pub n_rounds: usize,
    /// The number of fitness evaluations
    pub n_f_evals: usize,
    /// The fitness of the swarm's best position against the current point of interest
    pub best_fitness: Float,
    /// An indicator of whether the best fitness is within the configured tolerance
    pub converged: bool,
    /// A message containing information about the condition of the swarm
    pub message: String,
}

impl Default for SwarmStatus {
    fn default() -> Self {
        Self {
            n_rounds: 0,
            n_f_evals: 0,
            best_fitness: Float::INFINITY,
            converged: false,
            message: String::new(),
        }
    }
}

impl Status for SwarmStatus {
    fn reset(&mut self) {
        *self = Self::default();
    }
    fn converged(&self) -> bool {
        self.converged
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut status = SwarmStatus {
            n_rounds: 3,
            n_f_evals: 40,
            best_fitness: 0.5,
            converged: true,
            message: "Converged".to_string(),
        };
        status.reset();
        assert_eq!(status.n_rounds, 0);
        assert_eq!(status.n_f_evals, 0);
        assert!(status.best_fitness.is_infinite());
        assert!(!status.converged());
        assert_eq!(status.message(), "");
    }
}
