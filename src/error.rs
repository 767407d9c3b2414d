use core::fmt;
use grid_util::point::Point;

/// Configuration problems surfaced before any search work happens. A goal
/// that merely cannot be reached is not an error; [solve](crate::NavGrid::solve)
/// reports it as a normal `Ok(false)` outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// The grid has no cells (it was built with zero width or height).
    NotBuilt,
    /// A start or end point lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::NotBuilt => write!(f, "grid has not been built"),
            GridError::OutOfBounds(p) => write!(f, "point {} lies outside the grid", p),
        }
    }
}

impl std::error::Error for GridError {}
