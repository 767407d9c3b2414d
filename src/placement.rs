//! Randomized map setup: picking start/end cells and scattering obstacles.
//! Placement is a rejection sampler with a bounded number of retries per
//! obstacle, so a nearly full grid cannot livelock the caller.

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::warn;
use rand::Rng;

use crate::{GridError, NavGrid};

/// Retries per obstacle before giving up on the remaining placements.
const MAX_PLACEMENT_ATTEMPTS: usize = 32;

/// A uniformly random point on the grid. The grid must have at least one cell.
pub fn random_point<R: Rng>(grid: &NavGrid, rng: &mut R) -> Point {
    Point::new(
        rng.gen_range(0..grid.width()) as i32,
        rng.gen_range(0..grid.height()) as i32,
    )
}

/// Picks start and end cells uniformly at random. The two draws are
/// independent, so start and end may coincide; that is a valid degenerate
/// query for the solver.
pub fn choose_endpoints<R: Rng>(grid: &NavGrid, rng: &mut R) -> Result<(Point, Point), GridError> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(GridError::NotBuilt);
    }
    Ok((random_point(grid, rng), random_point(grid, rng)))
}

/// Scatters up to `count` obstacles across the grid, skipping `reserved`
/// positions (typically start and end) and cells that are already blocked.
/// Each placement is retried at most [MAX_PLACEMENT_ATTEMPTS] times; when a
/// placement cannot be satisfied the remaining ones are abandoned. Returns
/// the number of obstacles actually placed.
pub fn scatter_obstacles<R: Rng>(
    grid: &mut NavGrid,
    count: usize,
    reserved: &[Point],
    rng: &mut R,
) -> usize {
    if grid.width() == 0 || grid.height() == 0 {
        return 0;
    }
    let mut placed = 0;
    for _ in 0..count {
        let mut attempts = 0;
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                warn!(
                    "Abandoning obstacle placement after {} attempts ({} of {} placed)",
                    attempts, placed, count
                );
                return placed;
            }
            let p = random_point(grid, rng);
            if !reserved.contains(&p) && !grid.get_point(p) {
                grid.set_point(p, true);
                placed += 1;
                break;
            }
            attempts += 1;
        }
    }
    placed
}
