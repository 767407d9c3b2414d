//! The A* search loop and path extraction. The solver writes its bookkeeping
//! (visited flags, g/f scores, parent back-pointers) straight into the grid's
//! cell arena and resets it on every call, so the same grid can be solved
//! repeatedly, also after obstacle changes.

use grid_util::point::Point;
use log::{info, warn};

use crate::{Cell, GridError, NavGrid};

/// Euclidean distance between two cells, used both as edge cost and as
/// cost-to-goal heuristic. On a 4-connected grid the edge cost is always 1,
/// and the heuristic is admissible and consistent.
fn distance(a: &Cell, b: &Cell) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

impl NavGrid {
    /// Runs A* from `start` to `end`, leaving parent back-pointers in the
    /// grid for [extract_path](Self::extract_path) to follow. Returns whether
    /// `end` was reached; an unreachable goal is a normal [Ok]\([false])
    /// outcome, not an error.
    ///
    /// The search stops as soon as the goal is selected for expansion rather
    /// than running the open list to exhaustion, trading provable optimality
    /// in rare tie configurations for less exploration.
    pub fn solve(&mut self, start: Point, end: Point) -> Result<bool, GridError> {
        if self.cells.is_empty() {
            return Err(GridError::NotBuilt);
        }
        let start_ix = self.cell_ix(&start).ok_or(GridError::OutOfBounds(start))?;
        let end_ix = self.cell_ix(&end).ok_or(GridError::OutOfBounds(end))?;
        self.update();

        for cell in &mut self.cells {
            cell.visited = false;
            cell.local_score = f32::INFINITY;
            cell.global_score = f32::INFINITY;
            cell.parent = None;
        }

        if self.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return Ok(false);
        }
        info!("{} is reachable from {}, computing path", end, start);

        self.cells[start_ix].local_score = 0.0;
        self.cells[start_ix].global_score = distance(&self.cells[start_ix], &self.cells[end_ix]);

        // Open list of candidate cells. A cell may be pushed several times;
        // stale entries are discarded lazily once it has been visited.
        let mut open: Vec<usize> = vec![start_ix];
        let mut current = start_ix;
        while !open.is_empty() && current != end_ix {
            // Stable ascending sort keeps tie-breaking between equal f-scores
            // deterministic.
            open.sort_by(|a, b| {
                self.cells[*a]
                    .global_score
                    .total_cmp(&self.cells[*b].global_score)
            });
            while !open.is_empty() && self.cells[open[0]].visited {
                open.remove(0);
            }
            if open.is_empty() {
                break;
            }
            current = open[0];
            self.cells[current].visited = true;

            for n_ix in self.cells[current].neighbours.clone() {
                if !self.cells[n_ix].visited && !self.cells[n_ix].obstacle {
                    open.push(n_ix);
                }
                let candidate =
                    self.cells[current].local_score + distance(&self.cells[current], &self.cells[n_ix]);
                if candidate < self.cells[n_ix].local_score {
                    self.cells[n_ix].parent = Some(current);
                    self.cells[n_ix].local_score = candidate;
                    self.cells[n_ix].global_score =
                        candidate + distance(&self.cells[n_ix], &self.cells[end_ix]);
                }
            }
        }

        let reached = self.cells[end_ix].parent.is_some() || start_ix == end_ix;
        if !reached {
            warn!("Reachable goal could not be pathed to, is the component data stale?");
        }
        Ok(reached)
    }

    /// The interior of the most recently solved path, from the cell before
    /// `end` down to the cell after the start. Empty if `end` has no parent
    /// (no path was found, or `end` coincides with the start).
    pub fn extract_path(&self, end: Point) -> Vec<Point> {
        let Some(end_ix) = self.cell_ix(&end) else {
            return Vec::new();
        };
        itertools::unfold(end_ix, |ix| {
            let cell = &self.cells[*ix];
            cell.parent.map(|parent_ix| {
                *ix = parent_ix;
                cell.point()
            })
        })
        .skip(1)
        .collect::<Vec<Point>>()
    }
}
