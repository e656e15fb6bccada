//! Exhaustive depth-first enumeration of simple paths.
//!
//! These searches are exponential in the worst case and are only meant for
//! small grids or for checking the other algorithms. The walk keeps an
//! explicit stack and a single path buffer, pushing and popping one cell per
//! step, so neither the call stack nor the copying grows with the path.

use std::collections::HashSet;
use std::convert::Infallible;
use std::ops::ControlFlow;

use wayfind_core::Cell;

use crate::traits::{Pather, endpoints_open};

/// One level of the walk: the neighbours of a path cell and how many of
/// them have been tried.
struct Frame {
    neighbors: Vec<Cell>,
    next: usize,
}

impl Frame {
    fn new<P: Pather + ?Sized>(pather: &P, p: Cell) -> Self {
        let mut neighbors = Vec::with_capacity(4);
        pather.neighbors(p, &mut neighbors);
        Self { neighbors, next: 0 }
    }
}

/// Visit every simple path from `start` to `goal` in depth-first order.
///
/// Neighbours are tried in the order the pather yields them, and a path
/// never revisits a cell. Paths end at their first arrival at `goal`.
/// `visit` can stop the walk early by returning [`ControlFlow::Break`],
/// whose value is then returned.
pub fn walk_simple_paths<P: Pather + ?Sized, B>(
    pather: &P,
    start: Cell,
    goal: Cell,
    mut visit: impl FnMut(&[Cell]) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let mut path = vec![start];
    if start == goal {
        return visit(&path);
    }
    let mut on_path: HashSet<Cell> = HashSet::new();
    on_path.insert(start);
    let mut stack = vec![Frame::new(pather, start)];

    while let Some(top) = stack.last_mut() {
        if top.next == top.neighbors.len() {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
            continue;
        }
        let np = top.neighbors[top.next];
        top.next += 1;
        if on_path.contains(&np) {
            continue;
        }

        path.push(np);
        if np == goal {
            visit(&path)?;
            path.pop();
            continue;
        }
        on_path.insert(np);
        stack.push(Frame::new(pather, np));
    }
    ControlFlow::Continue(())
}

/// First simple path found by depth-first search, or `None`.
///
/// No optimality guarantee: this is whichever path the neighbour order
/// reaches first.
pub fn find_path<P: Pather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if !endpoints_open(pather, "find_path", start, goal) {
        return None;
    }
    walk_simple_paths(pather, start, goal, |path| ControlFlow::Break(path.to_vec())).break_value()
}

/// Every simple path from `start` to `goal`, in depth-first order.
///
/// The result set is combinatorial in the grid size.
pub fn find_all_paths<P: Pather + ?Sized>(pather: &P, start: Cell, goal: Cell) -> Vec<Vec<Cell>> {
    let mut paths = Vec::new();
    if !endpoints_open(pather, "find_all_paths", start, goal) {
        return paths;
    }
    let ControlFlow::Continue(()) =
        walk_simple_paths(pather, start, goal, |path| -> ControlFlow<Infallible> {
            paths.push(path.to_vec());
            ControlFlow::Continue(())
        });
    log::debug!("find_all_paths: {start} -> {goal}: {} paths", paths.len());
    paths
}

/// Shortest simple path by step count, found by exhaustive search.
///
/// Among several shortest paths the first one in depth-first order wins.
pub fn find_shortest_path<P: Pather + ?Sized>(
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Option<Vec<Cell>> {
    if !endpoints_open(pather, "find_shortest_path", start, goal) {
        return None;
    }
    let mut shortest: Option<Vec<Cell>> = None;
    let mut seen = 0usize;
    let ControlFlow::Continue(()) =
        walk_simple_paths(pather, start, goal, |path| -> ControlFlow<Infallible> {
            seen += 1;
            if shortest.as_ref().is_none_or(|best| path.len() < best.len()) {
                shortest = Some(path.to_vec());
            }
            ControlFlow::Continue(())
        });
    log::debug!("find_shortest_path: {start} -> {goal}: compared {seen} paths");
    shortest
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Grid;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    /// Straightforward recursive enumeration, for checking the stack walk.
    fn recursive_all(g: &Grid, a: Cell, b: Cell, prefix: &[Cell], out: &mut Vec<Vec<Cell>>) {
        let mut path = prefix.to_vec();
        path.push(a);
        if a == b {
            out.push(path);
            return;
        }
        for np in g.neighbors(a) {
            if !path.contains(&np) {
                recursive_all(g, np, b, &path, out);
            }
        }
    }

    #[test]
    fn matches_recursive_order() {
        let mut g = Grid::new(3, 4);
        g.add_wall(c(1, 1));
        let mut expected = Vec::new();
        recursive_all(&g, c(0, 0), c(2, 3), &[], &mut expected);
        let got = find_all_paths(&g, c(0, 0), c(2, 3));
        assert!(!got.is_empty());
        assert_eq!(got, expected);
    }

    #[test]
    fn all_paths_in_2x2() {
        let g = Grid::new(2, 2);
        let paths = find_all_paths(&g, c(0, 0), c(1, 1));
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn paths_are_simple() {
        let g = Grid::new(3, 3);
        for path in find_all_paths(&g, c(0, 0), c(2, 2)) {
            let unique: HashSet<Cell> = path.iter().copied().collect();
            assert_eq!(unique.len(), path.len());
            assert_eq!(path.first(), Some(&c(0, 0)));
            assert_eq!(path.last(), Some(&c(2, 2)));
        }
    }

    #[test]
    fn first_path_is_first_enumerated() {
        let g = Grid::new(3, 3);
        let all = find_all_paths(&g, c(0, 0), c(2, 2));
        assert_eq!(find_path(&g, c(0, 0), c(2, 2)).as_ref(), all.first());
    }

    #[test]
    fn shortest_is_first_minimal() {
        let mut g = Grid::new(4, 4);
        g.add_wall(c(1, 1));
        g.add_wall(c(2, 2));
        let all = find_all_paths(&g, c(0, 0), c(3, 3));
        let min = all.iter().map(Vec::len).min();
        let first_min = all.iter().find(|p| Some(p.len()) == min);
        let shortest = find_shortest_path(&g, c(0, 0), c(3, 3));
        assert_eq!(shortest.as_ref(), first_min);
        assert_eq!(shortest.map(|p| p.len()), Some(7));
    }

    #[test]
    fn no_path_is_none() {
        let mut g = Grid::new(3, 3);
        for r in 0..3 {
            g.add_wall(c(r, 1));
        }
        assert_eq!(find_path(&g, c(0, 0), c(0, 2)), None);
        assert_eq!(find_shortest_path(&g, c(0, 0), c(0, 2)), None);
        assert!(find_all_paths(&g, c(0, 0), c(0, 2)).is_empty());
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::new(1, 1);
        assert_eq!(find_path(&g, c(0, 0), c(0, 0)), Some(vec![c(0, 0)]));
        assert_eq!(find_shortest_path(&g, c(0, 0), c(0, 0)), Some(vec![c(0, 0)]));
        assert_eq!(find_all_paths(&g, c(0, 0), c(0, 0)), vec![vec![c(0, 0)]]);
    }

    #[test]
    fn walk_returns_break_value() {
        let g = Grid::new(3, 3);
        let mut count = 0;
        let third = walk_simple_paths(&g, c(0, 0), c(2, 2), |path| {
            count += 1;
            if count == 3 {
                ControlFlow::Break(path.to_vec())
            } else {
                ControlFlow::Continue(())
            }
        });
        let all = find_all_paths(&g, c(0, 0), c(2, 2));
        assert_eq!(third.break_value().as_ref(), all.get(2));

        let done: ControlFlow<()> =
            walk_simple_paths(&g, c(1, 1), c(1, 1), |_| ControlFlow::Continue(()));
        assert!(done.is_continue());
        let stopped = walk_simple_paths(&g, c(1, 1), c(1, 1), |p| ControlFlow::Break(p.len()));
        assert_eq!(stopped, ControlFlow::Break(1));
    }

    #[test]
    fn long_corridor_does_not_recurse() {
        // A serpentine corridor long enough to be uncomfortable for a
        // recursive walk in a debug build.
        let rows = 201;
        let cols = 60;
        let mut g = Grid::new(rows, cols);
        for r in (1..rows).step_by(2) {
            for col in 0..cols {
                let gap = if (r / 2) % 2 == 0 { cols - 1 } else { 0 };
                if col != gap {
                    g.add_wall(c(r, col));
                }
            }
        }
        let goal = c(rows - 1, cols - 1);
        let path = find_path(&g, c(0, 0), goal).unwrap();
        assert_eq!(path.last(), Some(&goal));
    }
}
