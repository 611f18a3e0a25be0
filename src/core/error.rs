use thiserror::Error;

use crate::Float;

/// Errors raised by the swarm, its particles, and the vector type.
///
/// None of these are recovered from internally: they propagate unchanged through
/// [`Swarm`](crate::algorithms::particles::Swarm) to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// The swarm has no particles to work with.
    #[error("the swarm has no particles; add particles before preparing it")]
    EmptySwarm,
    /// A vector component was requested outside of the vector's fixed dimension.
    #[error("component index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfRange {
        /// The requested component
        index: usize,
        /// The dimension of the vector
        dimension: usize,
    },
    /// A random vector was requested with an empty sampling interval along some axis.
    #[error("cannot sample axis {axis} from the empty range [{low}, {high})")]
    InvalidRange {
        /// The offending axis
        axis: usize,
        /// The lower bound along that axis
        low: Float,
        /// The upper bound along that axis
        high: Float,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SwarmError::EmptySwarm.to_string(),
            "the swarm has no particles; add particles before preparing it"
        );
        assert_eq!(
            SwarmError::IndexOutOfRange {
                index: 2,
                dimension: 2
            }
            .to_string(),
            "component index 2 is out of range for a vector of dimension 2"
        );
        assert_eq!(
            SwarmError::InvalidRange {
                axis: 1,
                low: 5.0,
                high: 5.0
            }
            .to_string(),
            "cannot sample axis 1 from the empty range [5, 5)"
        );
    }
}
