use grid_astar::NavGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use grid_util::rect::Rect;

// In this example a path is found on a grid with shape
// S..
// ##.
// E..
// S marks the start
// E marks the end
fn main() {
    let mut nav_grid: NavGrid = NavGrid::new(3, 3, false);
    nav_grid.set_rectangle(&Rect::new(0, 1, 2, 1), true);
    let start = Point::new(0, 0);
    let end = Point::new(0, 2);
    if nav_grid.solve(start, end).unwrap() {
        println!("A path has been found:");
        println!("{:?}", start);
        for p in nav_grid.extract_path(end).into_iter().rev() {
            println!("{:?}", p);
        }
        println!("{:?}", end);
    }
}
