//! Interchangeable search strategies behind one [`Search`] interface.

use std::fmt;
use std::str::FromStr;

use wayfind_core::{Cell, Grid};

use crate::{
    astar_search, bfs_search, breadcrumb_path, dijkstra_search, find_path, find_shortest_path, fsp,
};

/// A path search over a [`Grid`].
///
/// Implementations return the path from `start` to `goal` inclusive, or an
/// empty vector when no path was found.
pub trait Search {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell>;
}

/// Breadth-first search with early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

/// Uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// A* with the Manhattan estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Astar;

/// Breadth-first flood without early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fsp;

/// Breadth-first flood over a breadcrumb list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Breadcrumb;

/// First simple path in depth-first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPath;

/// Exhaustive shortest simple path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPath;

impl Search for Bfs {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        bfs_search(grid, start, goal)
    }
}

impl Search for Dijkstra {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        dijkstra_search(grid, start, goal)
    }
}

impl Search for Astar {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        astar_search(grid, start, goal)
    }
}

impl Search for Fsp {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        fsp(grid, start, goal)
    }
}

impl Search for Breadcrumb {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        breadcrumb_path(grid, start, goal)
    }
}

impl Search for FirstPath {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        find_path(grid, start, goal).unwrap_or_default()
    }
}

impl Search for ShortestPath {
    fn find(&self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        find_shortest_path(grid, start, goal).unwrap_or_default()
    }
}

/// Named search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    Bfs,
    Dijkstra,
    Astar,
    Fsp,
    Breadcrumb,
    Dfs,
    DfsShortest,
}

impl Strategy {
    /// Every strategy, cheapest first.
    pub const ALL: [Strategy; 7] = [
        Strategy::Bfs,
        Strategy::Dijkstra,
        Strategy::Astar,
        Strategy::Fsp,
        Strategy::Breadcrumb,
        Strategy::Dfs,
        Strategy::DfsShortest,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
            Self::Fsp => "fsp",
            Self::Breadcrumb => "breadcrumb",
            Self::Dfs => "dfs",
            Self::DfsShortest => "dfs-shortest",
        }
    }

    /// Whether the strategy takes edge weights into account.
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::Astar)
    }

    /// Whether the strategy enumerates simple paths and so can take
    /// exponential time.
    pub const fn is_exhaustive(self) -> bool {
        matches!(self, Self::Dfs | Self::DfsShortest)
    }

    /// The implementation behind this name.
    pub fn searcher(self) -> &'static dyn Search {
        match self {
            Self::Bfs => &Bfs,
            Self::Dijkstra => &Dijkstra,
            Self::Astar => &Astar,
            Self::Fsp => &Fsp,
            Self::Breadcrumb => &Breadcrumb,
            Self::Dfs => &FirstPath,
            Self::DfsShortest => &ShortestPath,
        }
    }

    /// Run this strategy.
    pub fn find(self, grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
        self.searcher().find(grid, start, goal)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.name() == lower)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy \u{201c}{}\u{201d} (expected one of", self.0)?;
        for (i, st) in Strategy::ALL.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{st}")?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ParseStrategyError {}
