use wayfind_core::Cell;

use crate::dijkstra::best_first;
use crate::traits::AstarPather;

/// Compute a cheapest path from `start` to `goal` using A*.
///
/// Entries are prioritised by accumulated cost plus
/// [`AstarPather::estimate`] towards `goal`. The result is optimal whenever
/// the estimate never overestimates; for [`Grid`](wayfind_core::Grid) that
/// holds as long as every weight is at least 1.
///
/// Returns the full path (including both endpoints) or an empty vector if
/// `goal` is unreachable.
pub fn astar_search<P: AstarPather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    best_first(pather, "astar", start, goal, |p| pather.estimate(p, goal))
}
