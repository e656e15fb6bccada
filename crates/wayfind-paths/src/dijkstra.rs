use std::collections::HashMap;

use wayfind_core::Cell;

use crate::path::{CameFrom, make_path};
use crate::pqueue::PriorityQueue;
use crate::traits::{WeightedPather, endpoints_open};

/// Uniform-cost (Dijkstra) search from `start` to `goal`.
///
/// Returns a cheapest path by the sum of [`WeightedPather::cost`] along its
/// steps, or an empty vector if `goal` is unreachable. Costs must be
/// non-negative; they are accumulated as `i64`.
pub fn dijkstra_search<P: WeightedPather + ?Sized>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Vec<Cell> {
    best_first(pather, "dijkstra", start, goal, |_| 0)
}

/// Best-first search keyed by `g + h(cell)`.
///
/// With `h = 0` this is Dijkstra; with an estimate towards the goal it is A*.
pub(crate) fn best_first<P: WeightedPather + ?Sized>(
    pather: &P,
    algo: &str,
    start: Cell,
    goal: Cell,
    h: impl Fn(Cell) -> i32,
) -> Vec<Cell> {
    if !endpoints_open(pather, algo, start, goal) {
        return Vec::new();
    }

    let mut front: PriorityQueue<Cell> = PriorityQueue::new();
    front.put(start, 0);
    let mut came_from = CameFrom::new();
    came_from.insert(start, None);
    let mut cost_so_far: HashMap<Cell, i64> = HashMap::new();
    cost_so_far.insert(start, 0);

    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some((cp, priority)) = front.pop_with_priority() {
        let Some(&current_g) = cost_so_far.get(&cp) else {
            continue;
        };
        // Skip stale entries superseded by a cheaper re-insertion.
        if priority > current_g + i64::from(h(cp)) {
            continue;
        }
        if cp == goal {
            break;
        }
        expanded += 1;
        log::trace!("{algo}: expand {cp} g={current_g}");

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let new_cost = current_g + i64::from(pather.cost(cp, np));
            if cost_so_far.get(&np).is_none_or(|&old| new_cost < old) {
                cost_so_far.insert(np, new_cost);
                front.put(np, new_cost + i64::from(h(np)));
                came_from.insert(np, Some(cp));
            }
        }
    }

    let path = make_path(&came_from, start, goal);
    log::debug!(
        "{algo}: {start} -> {goal}: expanded {expanded}, path len {}, cost {}",
        path.len(),
        cost_so_far.get(&goal).copied().unwrap_or(-1)
    );
    path
}
