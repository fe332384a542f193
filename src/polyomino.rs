#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Add;

/// Integer grid offset. Used both for piece-local cells and absolute lane positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn moved_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    // Up, left, right, down
    fn neighbors(self) -> [Self; 4] {
        [
            self.moved_by(0, -1),
            self.moved_by(-1, 0),
            self.moved_by(1, 0),
            self.moved_by(0, 1),
        ]
    }

    fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Add for Cell {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.moved_by(rhs.x, rhs.y)
    }
}

// Growth is confined to the lower half-plane, with the y == 0 row limited to x >= 0
pub(crate) fn is_placable(cell: Cell) -> bool {
    cell.y > 0 || (cell.y == 0 && cell.x >= 0)
}

// Custom error type for shape construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    Empty,
    Duplicate(Cell),
    Disconnected(Cell),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "a polyomino needs at least one cell"),
            ShapeError::Duplicate(cell) => {
                write!(f, "cell ({}, {}) appears more than once", cell.x, cell.y)
            }
            ShapeError::Disconnected(cell) => write!(
                f,
                "cell ({}, {}) does not touch any earlier cell",
                cell.x, cell.y
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Un-normalized growth walk behind [`Polyomino::grow`].
///
/// Also returns how many times the cursor ran out of fresh candidates and had to
/// recycle one it skipped earlier.
pub(crate) fn grow_cells(count: NonZeroUsize, rng: &mut fastrand::Rng) -> (Vec<Cell>, usize) {
    let mut last = Cell::ORIGIN;
    let mut cells = Vec::with_capacity(count.get());
    cells.push(last);
    let mut candidates = vec![last];
    let mut cursor = 0;
    let mut recycled = 0;

    for _ in 1..count.get() {
        for neighbor in last.neighbors() {
            if is_placable(neighbor) && !candidates.contains(&neighbor) {
                candidates.push(neighbor);
            }
        }

        if cursor + 1 == candidates.len() {
            // Nothing left ahead of the cursor: move one skipped candidate to the end
            let skipped: Vec<usize> = (1..cursor)
                .filter(|&i| !cells.contains(&candidates[i]))
                .collect();
            let Some(&index) = rng.choice(&skipped) else {
                unreachable!("the cell below the lowest row is always a candidate");
            };
            let candidate = candidates.remove(index);
            candidates.push(candidate);
            cursor -= 1;
            recycled += 1;
        }

        cursor = rng.usize(cursor + 1..candidates.len());
        last = candidates[cursor];
        cells.push(last);
    }

    (cells, recycled)
}

/// A connected shape of unique cells whose bounding box always starts at (0, 0).
///
/// Cells keep the order in which they were added, so every cell after the first
/// touches at least one cell before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyomino {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Polyomino {
    /// Grows a random shape of `count` cells.
    ///
    /// Starting from the origin, each step adds the placable neighbours of the last
    /// placed cell to an append-only candidate list and picks the next cell uniformly
    /// among the candidates after the previously picked one.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Empty`] when `count` is zero.
    pub fn generate(count: usize, rng: &mut fastrand::Rng) -> Result<Self, ShapeError> {
        let count = NonZeroUsize::new(count).ok_or(ShapeError::Empty)?;
        Ok(Self::grow(count, rng))
    }

    /// Same as [`Polyomino::generate`] for a count that cannot be zero.
    #[must_use]
    pub fn grow(count: NonZeroUsize, rng: &mut fastrand::Rng) -> Self {
        let (cells, _) = grow_cells(count, rng);
        Self::normalized(cells)
    }

    /// Builds a shape from explicit cells, checking uniqueness and connectivity.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, repeats a cell, or contains a cell
    /// that does not touch any cell listed before it.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self, ShapeError> {
        let cells: Vec<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(ShapeError::Empty);
        }

        for (i, &cell) in cells.iter().enumerate().skip(1) {
            let earlier = &cells[..i];
            if earlier.contains(&cell) {
                return Err(ShapeError::Duplicate(cell));
            }
            if !earlier.iter().any(|&other| other.is_adjacent(cell)) {
                return Err(ShapeError::Disconnected(cell));
            }
        }

        Ok(Self::normalized(cells))
    }

    fn normalized(mut cells: Vec<Cell>) -> Self {
        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
        for cell in &mut cells {
            *cell = cell.moved_by(-min_x, -min_y);
        }

        let width = cells.iter().map(|c| c.x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|c| c.y).max().unwrap_or(0) + 1;

        Self {
            cells,
            width,
            height,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Rotates a quarter turn clockwise: (x, y) -> (-y, x).
    pub fn rotate_right(&mut self) {
        self.rotate_with(|c| Cell::new(-c.y, c.x));
    }

    /// Rotates a quarter turn counter-clockwise: (x, y) -> (y, -x).
    pub fn rotate_left(&mut self) {
        self.rotate_with(|c| Cell::new(c.y, -c.x));
    }

    fn rotate_with(&mut self, map: impl Fn(Cell) -> Cell) {
        let rotated = self.cells.iter().copied().map(map).collect();
        let (width, height) = (self.height, self.width);
        *self = Self::normalized(rotated);
        debug_assert_eq!((self.width, self.height), (width, height));
        self.width = width;
        self.height = height;
    }

    /// Cells translated to an absolute lane position.
    pub fn absolute_cells(&self, position: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&c| c + position)
    }

    /// Sorted absolute rows of the leftmost column.
    #[must_use]
    pub fn left_edge(&self, offset_y: i32) -> Vec<i32> {
        self.column_rows(0, offset_y)
    }

    /// Sorted absolute rows of the rightmost column.
    #[must_use]
    pub fn right_edge(&self, offset_y: i32) -> Vec<i32> {
        self.column_rows(self.width - 1, offset_y)
    }

    fn column_rows(&self, column: i32, offset_y: i32) -> Vec<i32> {
        let mut rows: Vec<i32> = self
            .cells
            .iter()
            .filter(|c| c.x == column)
            .map(|c| c.y + offset_y)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}
