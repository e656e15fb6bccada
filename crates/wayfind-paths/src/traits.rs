use wayfind_core::{Cell, Grid};

use crate::distance::manhattan;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>);

    /// Whether `p` can be a search endpoint. Searches return no path when
    /// either endpoint is rejected.
    fn contains(&self, _p: Cell) -> bool {
        true
    }
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// A* only returns optimal paths when this never overestimates.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
        buf.extend(Grid::neighbors(self, p));
    }

    fn contains(&self, p: Cell) -> bool {
        self.in_bounds(p) && self.passable(p)
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Cell, to: Cell) -> i32 {
        Grid::cost(self, from, to)
    }
}

/// Manhattan distance: admissible on a 4-connected grid as long as every
/// weight is at least 1.
impl AstarPather for Grid {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

/// Shared endpoint gate for every search.
pub(crate) fn endpoints_open<P: Pather + ?Sized>(
    pather: &P,
    algo: &str,
    start: Cell,
    goal: Cell,
) -> bool {
    if pather.contains(start) && pather.contains(goal) {
        return true;
    }
    log::debug!("{algo}: endpoint rejected ({start} -> {goal}), no path");
    false
}
