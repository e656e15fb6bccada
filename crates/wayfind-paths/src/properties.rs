//! Cross-algorithm checks over seeded random grids.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind_core::{Cell, Grid};

use crate::{
    Strategy, astar_search, bfs_search, dijkstra_search, find_all_paths, manhattan, path_cost,
};

fn c(row: i32, col: i32) -> Cell {
    Cell::new(row, col)
}

/// A small grid with roughly `wall_pct` walls and weights in `1..=max_w`.
/// Start and goal are open cells.
fn random_case(rng: &mut StdRng, max_side: i32, wall_pct: f64, max_w: i32) -> (Grid, Cell, Cell) {
    let rows = rng.random_range(1..=max_side);
    let cols = rng.random_range(1..=max_side);
    let mut g = Grid::new(rows, cols);
    for p in g.cells().collect::<Vec<_>>() {
        if rng.random_bool(wall_pct) {
            g.add_wall(p);
        } else if max_w > 1 {
            g.set_weight(p, rng.random_range(1..=max_w));
        }
    }
    let start = c(rng.random_range(0..rows), rng.random_range(0..cols));
    let goal = c(rng.random_range(0..rows), rng.random_range(0..cols));
    g.remove_wall(start);
    g.remove_wall(goal);
    (g, start, goal)
}

fn assert_valid_path(g: &Grid, path: &[Cell], start: Cell, goal: Cell) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert_eq!(manhattan(w[0], w[1]), 1, "non-adjacent step {} -> {}", w[0], w[1]);
    }
    for &p in path {
        assert!(g.in_bounds(p) && g.passable(p), "{p} is not open");
    }
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let (g, start, goal) = random_case(&mut rng, 12, 0.0, 1);
        let want = manhattan(start, goal) as usize + 1;
        for path in [
            bfs_search(&g, start, goal),
            dijkstra_search(&g, start, goal),
            astar_search(&g, start, goal),
        ] {
            assert_eq!(path.len(), want);
            assert_valid_path(&g, &path, start, goal);
        }
    }
}

#[test]
fn dijkstra_is_minimal_among_all_simple_paths() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..150 {
        let (g, start, goal) = random_case(&mut rng, 5, 0.25, 6);
        let all = find_all_paths(&g, start, goal);
        let best = all.iter().map(|p| path_cost(&g, p)).min();
        let d = dijkstra_search(&g, start, goal);
        match best {
            Some(best) => {
                assert_valid_path(&g, &d, start, goal);
                assert_eq!(path_cost(&g, &d), best);
            }
            None => assert!(d.is_empty()),
        }
    }
}

#[test]
fn astar_cost_equals_dijkstra_cost() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..300 {
        let (g, start, goal) = random_case(&mut rng, 15, 0.3, 9);
        let a = astar_search(&g, start, goal);
        let d = dijkstra_search(&g, start, goal);
        assert_eq!(a.is_empty(), d.is_empty());
        if !a.is_empty() {
            assert_valid_path(&g, &a, start, goal);
            assert_eq!(path_cost(&g, &a), path_cost(&g, &d));
        }
    }
}

#[test]
fn breadth_first_family_agrees() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..200 {
        let (g, start, goal) = random_case(&mut rng, 10, 0.3, 1);
        let b = Strategy::Bfs.find(&g, start, goal);
        assert_eq!(Strategy::Fsp.find(&g, start, goal), b);
        assert_eq!(Strategy::Breadcrumb.find(&g, start, goal), b);
        if !b.is_empty() {
            assert_eq!(dijkstra_search(&g, start, goal).len(), b.len());
        }
    }
}

#[test]
fn searches_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let (g, start, goal) = random_case(&mut rng, 5, 0.2, 4);
        for st in Strategy::ALL {
            assert_eq!(st.find(&g, start, goal), st.find(&g, start, goal), "{st}");
        }
    }
}

#[test]
fn toggling_a_path_cell_reroutes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;
    for _ in 0..200 {
        let (mut g, start, goal) = random_case(&mut rng, 10, 0.2, 3);
        for st in [Strategy::Bfs, Strategy::Dijkstra, Strategy::Astar] {
            let before = st.find(&g, start, goal);
            if before.len() < 3 {
                continue;
            }
            let blocked = before[before.len() / 2];
            assert!(g.toggle_wall(blocked));
            let after = st.find(&g, start, goal);
            assert_ne!(after, before, "{st}");
            assert!(!after.contains(&blocked), "{st}");
            if !after.is_empty() {
                assert_valid_path(&g, &after, start, goal);
            }
            assert!(!g.toggle_wall(blocked));
            checked += 1;
        }
    }
    assert!(checked > 100);
}

#[test]
fn five_by_five_open() {
    let g = Grid::new(5, 5);
    let bfs = bfs_search(&g, c(0, 0), c(4, 4));
    assert_eq!(bfs.len(), 9);
    let astar = astar_search(&g, c(0, 0), c(4, 4));
    assert_eq!(path_cost(&g, &astar), 8);
    for st in Strategy::ALL {
        let path = st.find(&g, c(0, 0), c(4, 4));
        assert_valid_path(&g, &path, c(0, 0), c(4, 4));
        if !st.is_exhaustive() || st == Strategy::DfsShortest {
            assert_eq!(path.len(), 9, "{st}");
        }
    }
}

#[test]
fn vertical_barrier_blocks_everything() {
    let mut g = Grid::new(3, 3);
    g.add_wall(c(0, 1));
    g.add_wall(c(1, 1));
    g.add_wall(c(2, 1));
    for st in Strategy::ALL {
        assert!(st.find(&g, c(0, 0), c(0, 2)).is_empty(), "{st}");
    }
    assert!(find_all_paths(&g, c(0, 0), c(0, 2)).is_empty());
}

#[test]
fn single_cell_grid() {
    let g = Grid::new(1, 1);
    for st in Strategy::ALL {
        assert_eq!(st.find(&g, c(0, 0), c(0, 0)), vec![c(0, 0)], "{st}");
    }
}

#[test]
fn invalid_endpoints_are_unreachable_for_all() {
    let mut g = Grid::new(4, 4);
    g.add_wall(c(1, 1));
    for st in Strategy::ALL {
        assert!(st.find(&g, c(1, 1), c(3, 3)).is_empty(), "{st}");
        assert!(st.find(&g, c(0, 0), c(1, 1)).is_empty(), "{st}");
        assert!(st.find(&g, c(0, 0), c(4, 0)).is_empty(), "{st}");
        assert!(st.find(&g, c(1, 1), c(1, 1)).is_empty(), "{st}");
    }
    assert!(g.validate_endpoints(c(1, 1), c(3, 3)).is_err());
}
