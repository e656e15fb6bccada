//! Path reconstruction from a predecessor map.

use std::collections::HashMap;

use wayfind_core::Cell;

use crate::traits::WeightedPather;

/// Predecessor map built by a search. `None` marks the start.
pub type CameFrom = HashMap<Cell, Option<Cell>>;

/// Retrace breadcrumbs from `goal` back to `start`.
///
/// Returns the cells from `start` to `goal` inclusive, or an empty vector
/// when the chain is broken. A broken chain means the goal was not reached
/// by the part of the frontier that was actually explored; it does not by
/// itself prove that no path exists.
pub fn make_path(came_from: &CameFrom, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cp = goal;
    while cp != start {
        // Longer than the map: the chain loops.
        if path.len() > came_from.len() {
            return Vec::new();
        }
        path.push(cp);
        match came_from.get(&cp) {
            Some(&Some(prev)) => cp = prev,
            _ => return Vec::new(),
        }
    }
    path.push(start);
    path.reverse();
    path
}

/// Sum of edge costs along `path`. Zero for paths of fewer than two cells.
///
/// Summed as `i64` so that long paths over heavy cells do not overflow.
pub fn path_cost<P: WeightedPather + ?Sized>(pather: &P, path: &[Cell]) -> i64 {
    path.windows(2)
        .map(|w| i64::from(pather.cost(w[0], w[1])))
        .sum()
}
