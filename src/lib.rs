//! # grid_astar
//!
//! A grid-based pathfinding system. Implements
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) with a
//! Euclidean-distance heuristic on a uniform-cost grid with 4-connected
//! (cardinal) movement. Search state lives inside the grid itself as parent
//! back-pointers, so a solved grid can be queried for the path afterwards.
//! Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod astar;
mod error;
pub mod placement;

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

pub use crate::error::GridError;
use core::fmt;

/// One grid position together with its search metadata. Cells are stored in a
/// flat row-major arena owned by [NavGrid]; `parent` and `neighbours` are
/// indices into that arena rather than references, so the grid stays trivially
/// cloneable and resettable.
#[derive(Clone, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    /// Whether the cell blocks movement. Set at build or placement time,
    /// never changed by a search.
    pub obstacle: bool,
    /// Search-local: has this cell been expanded by the current search?
    pub visited: bool,
    /// Search-local g-score: best known cost from the start to this cell.
    pub local_score: f32,
    /// Search-local f-score: `local_score` plus the heuristic estimate to
    /// the goal.
    pub global_score: f32,
    /// Search-local back-pointer to the predecessor on the best known path.
    pub parent: Option<usize>,
    pub(crate) neighbours: Vec<usize>,
}

impl Cell {
    fn new(x: i32, y: i32, obstacle: bool) -> Cell {
        Cell {
            x,
            y,
            obstacle,
            visited: false,
            local_score: f32::INFINITY,
            global_score: f32::INFINITY,
            parent: None,
            neighbours: Vec::new(),
        }
    }
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
    /// Arena indices of the up to 4 cardinal neighbours, fixed at build time.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
}

/// [NavGrid] owns a flat row-major arena of [Cell]s with eagerly computed
/// 4-neighbour adjacency, and maintains information about components using a
/// [UnionFind] structure next to the obstacle flags. Implements [Grid] so
/// obstacles can be read and written like on any other grid; writes keep the
/// components in sync.
#[derive(Clone, Debug)]
pub struct NavGrid {
    pub width: usize,
    pub height: usize,
    pub(crate) cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for NavGrid {
    fn default() -> NavGrid {
        NavGrid {
            width: 0,
            height: 0,
            cells: Vec::new(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl NavGrid {
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// The arena index of a point, or [None] if it lies outside the grid.
    pub fn cell_ix(&self, point: &Point) -> Option<usize> {
        if self.in_bounds(point.x, point.y) {
            Some(self.get_ix_point(point))
        } else {
            None
        }
    }
    /// Read access to a cell and its search metadata, for diagnostics and
    /// visualization.
    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        self.cell_ix(point).map(|ix| &self.cells[ix])
    }
    fn free_cardinal_neighbours(&self, point: Point) -> Vec<usize> {
        cardinal_offsets(point)
            .into_iter()
            .filter(|p| self.in_bounds(p.x, p.y))
            .map(|p| self.get_ix_point(&p))
            .filter(|ix| !self.cells[*ix].obstacle)
            .collect::<Vec<usize>>()
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on different components, in which case no
    /// path between them can exist.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                let parent_ix = self.get_ix(x, y);
                if self.cells[parent_ix].obstacle {
                    continue;
                }
                let point = Point::new(x as i32, y as i32);
                let neighbours = [
                    Point::new(point.x, point.y + 1),
                    Point::new(point.x + 1, point.y),
                ]
                .into_iter()
                .filter(|p| self.in_bounds(p.x, p.y))
                .map(|p| self.get_ix_point(&p))
                .filter(|ix| !self.cells[*ix].obstacle)
                .collect::<Vec<usize>>();
                for ix in neighbours {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

fn cardinal_offsets(point: Point) -> [Point; 4] {
    [
        Point::new(point.x, point.y - 1),
        Point::new(point.x, point.y + 1),
        Point::new(point.x - 1, point.y),
        Point::new(point.x + 1, point.y),
    ]
}

impl fmt::Display for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height {
            let values = (0..self.width)
                .map(|x| self.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for NavGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x as i32, y as i32, default_value));
            }
        }
        let mut base_grid = NavGrid {
            width,
            height,
            cells,
            components: UnionFind::new(width * height),
            // Everything starts out as a singleton; the first update() call
            // links the free cells up.
            components_dirty: true,
        };
        // Connections are computed once; cells on the border get fewer than 4.
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let ix = base_grid.get_ix(x as usize, y as usize);
                let neighbours = cardinal_offsets(Point::new(x, y))
                    .into_iter()
                    .filter(|p| base_grid.in_bounds(p.x, p.y))
                    .map(|p| base_grid.get_ix_point(&p))
                    .collect::<Vec<usize>>();
                base_grid.cells[ix].neighbours = neighbours;
            }
        }
        base_grid
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.get_ix(x, y)].obstacle
    }
    /// Updates the obstacle flag of a position on the grid. Joins newly
    /// connected components and flags the components as dirty if components
    /// are (potentially) broken apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let ix = self.get_ix(x, y);
        if !self.cells[ix].obstacle && blocked {
            self.components_dirty = true;
        } else if !blocked {
            for n_ix in self.free_cardinal_neighbours(Point::new(x as i32, y as i32)) {
                self.components.union(ix, n_ix);
            }
        }
        self.cells[ix].obstacle = blocked;
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}
