//! Breadth-first variants that flood the whole reachable region before
//! reconstructing. Kept for comparison with [`bfs_search`](crate::bfs_search):
//! they return the same paths but never stop early.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use wayfind_core::Cell;

use crate::path::{CameFrom, make_path};
use crate::traits::{Pather, endpoints_open};

/// Full-frontier BFS: floods every reachable cell, then retraces `goal`.
pub fn fsp<P: Pather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    if !endpoints_open(pather, "fsp", start, goal) {
        return Vec::new();
    }

    let mut front: VecDeque<Cell> = VecDeque::new();
    front.push_back(start);
    let mut came_from = CameFrom::new();
    came_from.insert(start, None);
    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    while let Some(cp) = front.pop_front() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if let Entry::Vacant(e) = came_from.entry(np) {
                e.insert(Some(cp));
                front.push_back(np);
            }
        }
    }

    log::debug!("fsp: {start} -> {goal}: flooded {} cells", came_from.len());
    make_path(&came_from, start, goal)
}

/// A breadcrumb left by the flood: a cell and the index of the crumb it
/// was reached from.
#[derive(Debug, Clone, Copy)]
struct Crumb {
    cell: Cell,
    parent: Option<usize>,
}

/// Two-pass BFS over a breadcrumb list.
///
/// The first pass floods the reachable region, appending one crumb per
/// discovered cell. The second pass flattens the crumb chain ending at
/// `goal` into a path. Returns an empty vector if `goal` was never reached.
pub fn breadcrumb_path<P: Pather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    if !endpoints_open(pather, "breadcrumb", start, goal) {
        return Vec::new();
    }

    let mut crumbs = vec![Crumb {
        cell: start,
        parent: None,
    }];
    let mut seen: HashMap<Cell, usize> = HashMap::new();
    seen.insert(start, 0);
    let mut front: VecDeque<usize> = VecDeque::new();
    front.push_back(0);
    let mut nbuf: Vec<Cell> = Vec::with_capacity(4);

    while let Some(ci) = front.pop_front() {
        nbuf.clear();
        pather.neighbors(crumbs[ci].cell, &mut nbuf);
        for &np in nbuf.iter() {
            if let Entry::Vacant(e) = seen.entry(np) {
                let ni = crumbs.len();
                e.insert(ni);
                crumbs.push(Crumb {
                    cell: np,
                    parent: Some(ci),
                });
                front.push_back(ni);
            }
        }
    }
    log::debug!(
        "breadcrumb: {start} -> {goal}: dropped {} crumbs",
        crumbs.len()
    );

    let Some(&gi) = seen.get(&goal) else {
        return Vec::new();
    };
    let mut path = Vec::new();
    let mut next = Some(gi);
    while let Some(i) = next {
        path.push(crumbs[i].cell);
        next = crumbs[i].parent;
    }
    path.reverse();
    path
}
