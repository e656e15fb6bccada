//! The [`Cell`] type: a `(row, col)` grid coordinate.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A grid coordinate. Rows grow downward, columns grow right.
///
/// Cells are plain values used as node identities and map keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
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

    /// Return a cell shifted by (drow, dcol). Coordinates wrap at the
    /// `i32` limits, so a shift off the edge lands far outside any grid.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row.wrapping_add(drow),
            col: self.col.wrapping_add(dcol),
        }
    }

    /// The four axis-aligned neighbours in base order: down, up, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `row + col` is even.
    #[inline]
    pub const fn is_even(self) -> bool {
        (self.row ^ self.col) & 1 == 0
    }

    /// Both coordinates packed into a single integer.
    #[inline]
    pub const fn packed(self) -> u64 {
        ((self.row as u32 as u64) << 32) | self.col as u32 as u64
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.packed());
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
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}
