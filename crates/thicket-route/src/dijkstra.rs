use std::collections::BinaryHeap;

use crate::grid::{OccupancyGrid, Point};

/// Cost of one orthogonal step.
const STEP: i32 = 1;

const NO_PARENT: usize = usize::MAX;

/// Open-list entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first, ties going to the lowest cell index.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest 4-connected path from `from` to `to` over free cells, using
/// Dijkstra's algorithm with unit step cost.
///
/// The returned path includes both endpoints. `None` when either endpoint
/// is outside the grid or not free, or when no path exists.
pub fn dijkstra(grid: &OccupancyGrid, from: Point, to: Point) -> Option<Vec<Point>> {
    best_first(grid, from, to, |_| 0)
}

/// Best-first search shared by [`dijkstra`] and [`astar`](crate::astar):
/// the open list is keyed on `g + estimate(p)`.
pub(crate) fn best_first<H>(
    grid: &OccupancyGrid,
    from: Point,
    to: Point,
    estimate: H,
) -> Option<Vec<Point>>
where
    H: Fn(Point) -> i32,
{
    if !grid.is_free(from) || !grid.is_free(to) {
        return None;
    }
    let start = grid.idx(from)?;
    let goal = grid.idx(to)?;
    if start == goal {
        return Some(vec![from]);
    }

    let mut g = vec![i32::MAX; grid.len()];
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut closed = vec![false; grid.len()];

    let mut open = BinaryHeap::new();
    g[start] = 0;
    open.push(NodeRef {
        idx: start,
        f: estimate(from),
    });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Stale entry.
        if closed[ci] {
            continue;
        }
        if ci == goal {
            return Some(trace_back(grid, &parent, goal));
        }
        closed[ci] = true;

        let cp = grid.point(ci);
        let tentative = g[ci] + STEP;
        for np in grid.free_neighbors(cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if closed[ni] || tentative >= g[ni] {
                continue;
            }
            g[ni] = tentative;
            parent[ni] = ci;
            open.push(NodeRef {
                idx: ni,
                f: tentative + estimate(np),
            });
        }
    }

    None
}

fn trace_back(grid: &OccupancyGrid, parent: &[usize], goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(grid.point(ci));
        ci = parent[ci];
    }
    path.reverse();
    path
}
