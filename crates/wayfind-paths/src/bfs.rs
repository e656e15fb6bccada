use std::collections::VecDeque;
use std::collections::hash_map::Entry;

use wayfind_core::Cell;

use crate::path::{CameFrom, make_path};
use crate::traits::{Pather, endpoints_open};

/// Breadth-first search from `start` to `goal`.
///
/// Every step counts as 1, so the result has the fewest steps. The search
/// stops as soon as `goal` is dequeued. Returns the path from `start` to
/// `goal` inclusive, or an empty vector if `goal` is unreachable.
pub fn bfs_search<P: Pather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    if !endpoints_open(pather, "bfs", start, goal) {
        return Vec::new();
    }

    let mut front: VecDeque<Cell> = VecDeque::new();
    front.push_back(start);
    let mut came_from = CameFrom::new();
    came_from.insert(start, None);

    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(cp) = front.pop_front() {
        if cp == goal {
            break;
        }
        expanded += 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if let Entry::Vacant(e) = came_from.entry(np) {
                e.insert(Some(cp));
                front.push_back(np);
            }
        }
    }

    let path = make_path(&came_from, start, goal);
    log::debug!(
        "bfs: {start} -> {goal}: expanded {expanded}, reached {}, path len {}",
        came_from.len(),
        path.len()
    );
    path
}
