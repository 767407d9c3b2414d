//! Fuzzes the pathfinding system by checking for many random grids that a
//! path is always found exactly when the goal is reachable, i.e. when start
//! and goal are part of the same connected component.
use grid_astar::NavGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng) -> NavGrid {
    let mut nav_grid: NavGrid = NavGrid::new(n, n, false);
    for x in 0..nav_grid.width() {
        for y in 0..nav_grid.height() {
            nav_grid.set(x, y, rng.gen_bool(0.4))
        }
    }
    nav_grid.generate_components();
    nav_grid
}

fn visualize_grid(grid: &NavGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get_point(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, &mut rng);
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        random_grid.update();
        let reachable = !random_grid.unreachable(&start, &end);
        let reached = random_grid.solve(start, end).unwrap();
        // Show the grid if the search disagrees with the components.
        if reached != reachable {
            visualize_grid(&random_grid, &start, &end);
        }
        assert!(reached == reachable);
        if reached {
            let interior = random_grid.extract_path(end);
            // Interior runs from next to the goal down to next to the start.
            let mut previous = end;
            for p in &interior {
                assert!(!random_grid.get_point(*p));
                assert_eq!((previous.x - p.x).abs() + (previous.y - p.y).abs(), 1);
                previous = *p;
            }
            assert_eq!((previous.x - start.x).abs() + (previous.y - start.y).abs(), 1);
            // A second solve on the untouched grid must reproduce the path.
            assert!(random_grid.solve(start, end).unwrap());
            assert_eq!(random_grid.extract_path(end), interior);
        }
    }
}
