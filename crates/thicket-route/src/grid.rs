//! Grid geometry: [`Point`], [`Cell`] and [`OccupancyGrid`].

use std::fmt;
use std::ops::Add;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid position. `x` is the column, `y` the row; row 0 is the top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// Fewest 4-connected moves from `self` to `other` with nothing in the
    /// way. Never overestimates a route on any grid.
    #[inline]
    pub fn steps_to(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Row-major, matching the grid's storage order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// State of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    /// An obstacle, or a trace that later routes must not cross.
    Blocked,
    /// Claimed by a trace laid down by [`Router::route`](crate::Router::route).
    Routed,
}

impl Cell {
    #[inline]
    pub fn is_free(self) -> bool {
        self == Cell::Free
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Free),
            '#' => Some(Cell::Blocked),
            '*' => Some(Cell::Routed),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Blocked => '#',
            Cell::Routed => '*',
        }
    }
}

// ---------------------------------------------------------------------------
// OccupancyGrid
// ---------------------------------------------------------------------------

/// A `width` x `height` rectangle of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// A grid with every cell free.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Free; width * height],
        }
    }

    /// Build a grid from rows of 0/1 flags: zero is free, anything else
    /// blocked.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: r.len(),
                    expected: width,
                });
            }
            cells.extend(r.iter().map(|&v| if v == 0 { Cell::Free } else { Cell::Blocked }));
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Parse the [`Display`](fmt::Display) form: one line per row, `.` free,
    /// `#` blocked, `*` routed. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = height;
            let start = cells.len();
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(GridError::UnknownCell { row, col, ch })?;
                cells.push(cell);
            }
            let len = cells.len() - start;
            let expected = *width.get_or_insert(len);
            if len != expected {
                return Err(GridError::Ragged { row, len, expected });
            }
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.idx(p).is_some()
    }

    /// Flat index of `p`, or `None` outside the grid.
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Point at flat index `i`.
    pub(crate) fn point(&self, i: usize) -> Point {
        Point::new((i % self.width) as i32, (i / self.width) as i32)
    }

    /// Cell at `p`, or `None` outside the grid.
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.get(p).is_some_and(Cell::is_free)
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) outside the
    /// grid.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Set every in-bounds cell of `path` to `cell`.
    pub fn mark(&mut self, path: &[Point], cell: Cell) {
        for &p in path {
            self.set(p, cell);
        }
    }

    /// Free in-bounds cardinal neighbours of `p`.
    pub(crate) fn free_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_free(n))
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }

    /// Number of cells in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
