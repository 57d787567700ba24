//! Geometry primitives: [`Cell`] and [`Extent`].
//!
//! A maze is a rectangle of `rows × cols` cells. Rows grow downwards and
//! columns grow rightwards; `(0, 0)` is the top-left interior cell. The ring
//! of positions just outside the rectangle (row or column `-1`, or equal to
//! the count) is the *boundary*: positions there may name entrances and
//! exits but never take part in generation.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A discrete grid position, identified by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// The size of a maze: `rows × cols` interior cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub rows: i32,
    pub cols: i32,
}

impl Extent {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Number of interior cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.rows as usize) * (self.cols as usize)
        }
    }

    /// An extent with no interior cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether the cell lies inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        0 <= c.row && c.row < self.rows && 0 <= c.col && c.col < self.cols
    }

    /// Whether the cell touches the outer ring: a row or column index of
    /// `-1` or equal to the row/column count.
    #[inline]
    pub fn is_boundary(self, c: Cell) -> bool {
        c.row == -1 || c.row == self.rows || c.col == -1 || c.col == self.cols
    }

    /// Whether the cell sits on the outer ring next to exactly one interior
    /// cell (i.e. on the ring but not on one of its four corners).
    pub fn is_boundary_side(self, c: Cell) -> bool {
        let row_out = c.row == -1 || c.row == self.rows;
        let col_out = c.col == -1 || c.col == self.cols;
        let row_in = 0 <= c.row && c.row < self.rows;
        let col_in = 0 <= c.col && c.col < self.cols;
        (row_out && col_in) || (col_out && row_in)
    }

    /// Flat row-major index of an interior cell.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Iterate over the interior cells in row-major order.
    #[inline]
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Extent {
    type Item = Cell;
    type IntoIter = ExtentIter;

    #[inline]
    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of an [`Extent`].
#[derive(Clone, Debug)]
pub struct ExtentIter {
    extent: Extent,
    next: usize,
    len: usize,
}

impl Iterator for ExtentIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.len {
            return None;
        }
        let c = self.extent.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ExtentIter {}
