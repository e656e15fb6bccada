//! Path search algorithms for 2D grids.
//!
//! Every search takes a graph, a start and a goal, and returns the path from
//! start to goal inclusive. "No path" is an empty vector (or `None` for the
//! exhaustive family), never an error.
//!
//! - **BFS** fewest steps, stops at the goal ([`bfs_search`])
//! - **Dijkstra** cheapest by edge cost ([`dijkstra_search`])
//! - **A\*** cheapest, guided by an estimate ([`astar_search`])
//! - **Full-frontier BFS** no early exit ([`fsp`], [`breadcrumb_path`])
//! - **Exhaustive DFS** over simple paths ([`find_path`], [`find_all_paths`],
//!   [`find_shortest_path`])
//!
//! [`Strategy`] names each variant and maps it to a [`Search`]
//! implementation, so callers can pick an algorithm at runtime.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, FSP, breadcrumb, DFS family |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](wayfind_core::Grid) implements all three.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod fsp;
mod path;
mod pqueue;
mod strategy;
mod traits;

#[cfg(test)]
mod properties;

pub use astar::astar_search;
pub use bfs::bfs_search;
pub use dfs::{find_all_paths, find_path, find_shortest_path, walk_simple_paths};
pub use dijkstra::dijkstra_search;
pub use distance::manhattan;
pub use fsp::{breadcrumb_path, fsp};
pub use path::{CameFrom, make_path, path_cost};
pub use pqueue::PriorityQueue;
pub use strategy::{
    Astar, Bfs, Breadcrumb, Dijkstra, FirstPath, Fsp, ParseStrategyError, Search, ShortestPath,
    Strategy,
};
pub use traits::{AstarPather, Pather, WeightedPather};
