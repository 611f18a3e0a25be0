/// Module containing distance-based fitness functions.
pub mod distance;
pub use distance::{EuclideanDistance, ManhattanDistance, SquaredDistance};
