use crate::dijkstra::best_first;
use crate::grid::{OccupancyGrid, Point};

/// Shortest 4-connected path from `from` to `to` over free cells, using A*
/// with the Manhattan heuristic.
///
/// Same contract as [`dijkstra`](crate::dijkstra); the path length always
/// agrees, the exact cells may differ.
pub fn astar(grid: &OccupancyGrid, from: Point, to: Point) -> Option<Vec<Point>> {
    best_first(grid, from, to, |p| p.steps_to(to))
}
