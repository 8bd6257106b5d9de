//! Sequential router with an injectable strategy.

use crate::grid::{Cell, OccupancyGrid, Point};

/// A successfully routed connection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Routed {
    pub start: Point,
    pub end: Point,
    pub path: Vec<Point>,
}

/// Lays traces on an [`OccupancyGrid`], one connection at a time.
///
/// The strategy is any `Fn(&OccupancyGrid, Point, Point) -> Option<Vec<Point>>`,
/// such as [`dijkstra`](crate::dijkstra) or [`astar`](crate::astar). The
/// router owns the grid; every successful route claims its cells so later
/// routes go around it.
#[derive(Debug, Clone)]
pub struct Router {
    grid: OccupancyGrid,
}

impl Router {
    pub fn new(grid: OccupancyGrid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }

    /// Route a single connection.
    ///
    /// On success the path's cells become [`Cell::Routed`] and the path is
    /// returned. On failure the grid is left untouched.
    pub fn route<S>(&mut self, start: Point, end: Point, strategy: S) -> Option<Vec<Point>>
    where
        S: Fn(&OccupancyGrid, Point, Point) -> Option<Vec<Point>>,
    {
        match strategy(&self.grid, start, end) {
            Some(path) if !path.is_empty() => {
                self.grid.mark(&path, Cell::Routed);
                Some(path)
            }
            _ => {
                log::debug!("no route found between {} and {}", start, end);
                None
            }
        }
    }

    /// Route `pairs` in order. Each successful path is turned into
    /// [`Cell::Blocked`] before the next pair is attempted, so traces never
    /// cross. Pairs that cannot be routed are skipped.
    pub fn multi_route<I, S>(&mut self, pairs: I, strategy: S) -> Vec<Routed>
    where
        I: IntoIterator<Item = (Point, Point)>,
        S: Fn(&OccupancyGrid, Point, Point) -> Option<Vec<Point>>,
    {
        let mut routed = Vec::new();
        for (start, end) in pairs {
            log::trace!("routing {} -> {}", start, end);
            match self.route(start, end, &strategy) {
                Some(path) => {
                    self.grid.mark(&path, Cell::Blocked);
                    routed.push(Routed { start, end, path });
                }
                None => log::warn!("failed to route {} -> {}", start, end),
            }
        }
        log::debug!("routed {} connection(s)", routed.len());
        routed
    }
}
