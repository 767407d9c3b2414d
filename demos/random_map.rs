use grid_astar::{placement, NavGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

// Builds a random map, picks random start and end cells, scatters obstacles
// around them and prints the solved grid.
fn main() {
    let mut rng = StdRng::from_entropy();
    let mut nav_grid: NavGrid = NavGrid::new(12, 12, false);
    let (start, end) = placement::choose_endpoints(&nav_grid, &mut rng).unwrap();
    let placed = placement::scatter_obstacles(&mut nav_grid, 40, &[start, end], &mut rng);
    println!("Placed {} obstacles", placed);

    let reached = nav_grid.solve(start, end).unwrap();
    let interior = nav_grid.extract_path(end);
    for y in (0..nav_grid.height() as i32).rev() {
        for x in 0..nav_grid.width() as i32 {
            let p = Point::new(x, y);
            if p == start {
                print!("S");
            } else if p == end {
                print!("G");
            } else if interior.contains(&p) {
                print!("o");
            } else if nav_grid.get_point(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
    if !reached {
        println!("No path exists between {} and {}", start, end);
    }
}
