//! A rectangular [`Grid`] with walls and per-cell traversal weights.

use std::collections::{HashMap, HashSet};

use crate::cell::Cell;
use crate::error::{Endpoint, GridError};

/// Weight of any cell without an explicit entry.
pub const DEFAULT_WEIGHT: i32 = 1;

/// A `rows` by `cols` grid with walls and weights.
///
/// `rows` and `cols` are fixed at construction. Walls and weights can be
/// edited freely between searches; searches borrow the grid immutably, so a
/// run always observes a stable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    walls: HashSet<Cell>,
    weights: HashMap<Cell, i32>,
}

impl Grid {
    /// Create an empty grid with no walls and uniform weight.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            walls: HashSet::new(),
            weights: HashMap::new(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `cell` lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        0 <= cell.row && cell.row < self.rows && 0 <= cell.col && cell.col < self.cols
    }

    /// Whether `cell` is not a wall. Bounds are not checked.
    #[inline]
    pub fn passable(&self, cell: Cell) -> bool {
        !self.walls.contains(&cell)
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Enumerate the in-bounds, non-wall neighbours of `cell`.
    ///
    /// Candidates are taken in the order down, up, left, right; when
    /// `row + col` is even the order is reversed. This parity flip is what
    /// makes BFS and A* pick a fixed path among equally short ones, so it
    /// must not change.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let mut steps = cell.neighbors_4();
        if cell.is_even() {
            steps.reverse();
        }
        steps
            .into_iter()
            .filter(move |&n| self.in_bounds(n))
            .filter(move |&n| self.passable(n))
    }

    /// Cost of stepping from `_from` onto `to`: the weight of `to`.
    #[inline]
    pub fn cost(&self, _from: Cell, to: Cell) -> i32 {
        self.weight(to)
    }

    /// Mark `cell` as a wall. Cells outside the grid are accepted but inert.
    pub fn add_wall(&mut self, cell: Cell) {
        self.walls.insert(cell);
    }

    /// Remove a wall. Returns `true` if `cell` was a wall.
    pub fn remove_wall(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    /// Flip the wall state of `cell`. Returns `true` if it is now a wall.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if self.walls.remove(&cell) {
            false
        } else {
            self.walls.insert(cell);
            true
        }
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// All walls in row-major order.
    pub fn walls(&self) -> Vec<Cell> {
        let mut v: Vec<Cell> = self.walls.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Number of walls.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Set the traversal weight of `cell`.
    pub fn set_weight(&mut self, cell: Cell, weight: i32) {
        self.weights.insert(cell, weight);
    }

    /// Traversal weight of `cell` ([`DEFAULT_WEIGHT`] if unset).
    #[inline]
    pub fn weight(&self, cell: Cell) -> i32 {
        self.weights.get(&cell).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Reset `cell` to the default weight.
    pub fn clear_weight(&mut self, cell: Cell) {
        self.weights.remove(&cell);
    }

    /// All explicit weights in row-major order.
    pub fn weights(&self) -> Vec<(Cell, i32)> {
        let mut v: Vec<(Cell, i32)> = self.weights.iter().map(|(&c, &w)| (c, w)).collect();
        v.sort_unstable();
        v
    }

    /// Check that both endpoints of a search are in bounds and open.
    ///
    /// Searches never call this themselves: an invalid endpoint just makes
    /// the goal unreachable. Callers that want a descriptive error can.
    pub fn validate_endpoints(&self, start: Cell, goal: Cell) -> Result<(), GridError> {
        self.validate(Endpoint::Start, start)?;
        self.validate(Endpoint::Goal, goal)
    }

    fn validate(&self, endpoint: Endpoint, cell: Cell) -> Result<(), GridError> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds {
                endpoint,
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !self.passable(cell) {
            return Err(GridError::Blocked { endpoint, cell });
        }
        Ok(())
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols.max(0);
        (0..self.rows.max(0)).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    walls: Vec<Cell>,
    weights: Vec<(Cell, i32)>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            rows: self.rows,
            cols: self.cols,
            walls: self.walls(),
            weights: self.weights(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            walls: repr.walls.into_iter().collect(),
            weights: repr.weights.into_iter().collect(),
        })
    }
}
