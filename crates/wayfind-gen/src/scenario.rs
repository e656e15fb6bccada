//! Random search scenarios: a grid plus start and goal cells.

use std::fmt;

use rand::{Rng, RngExt};
use wayfind_core::{Cell, Grid, GridError};

/// A grid together with the two endpoints of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

impl Scenario {
    /// Check that start and goal are inside the grid and not walls.
    pub fn validate(&self) -> Result<(), GridError> {
        self.grid.validate_endpoints(self.start, self.goal)
    }
}

/// Settings for [`ScenarioGen`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub rows: i32,
    pub cols: i32,
    /// Number of wall cells.
    pub walls: usize,
    /// Number of open cells given a random weight above 1.
    pub weighted: usize,
    /// Largest weight handed out to weighted cells.
    pub max_weight: i32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            walls: 19,
            weighted: 0,
            max_weight: 9,
        }
    }
}

/// Random scenario generator.
///
/// Start, goal, walls and weighted cells are all distinct cells sampled
/// without replacement.
pub struct ScenarioGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl<R: Rng> ScenarioGen<R> {
    /// Create a generator with the given settings.
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate one scenario.
    pub fn generate(&mut self) -> Result<Scenario, GenError> {
        let cfg = &self.config;
        if cfg.rows <= 0 || cfg.cols <= 0 {
            return Err(GenError::EmptyGrid {
                rows: cfg.rows,
                cols: cfg.cols,
            });
        }
        if cfg.weighted > 0 && cfg.max_weight < 2 {
            return Err(GenError::BadMaxWeight(cfg.max_weight));
        }
        let mut grid = Grid::new(cfg.rows, cfg.cols);
        let available = grid.len();
        // Counts that overflow `usize` can never fit.
        let needed = cfg
            .walls
            .checked_add(cfg.weighted)
            .and_then(|n| n.checked_add(2))
            .unwrap_or(usize::MAX);
        if needed > available {
            return Err(GenError::TooCrowded { needed, available });
        }

        // Partial Fisher-Yates: the first `needed` cells end up a uniform
        // sample without replacement.
        let mut cells: Vec<Cell> = grid.cells().collect();
        for i in 0..needed {
            let j = self.rng.random_range(i..available);
            cells.swap(i, j);
        }

        let start = cells[0];
        let goal = cells[1];
        let (walls, weighted) = cells[2..needed].split_at(cfg.walls);
        for &w in walls {
            grid.add_wall(w);
        }
        for &p in weighted {
            grid.set_weight(p, self.rng.random_range(2..=cfg.max_weight));
        }

        log::debug!(
            "generated {}x{} scenario: {} walls, {} weighted, {start} -> {goal}",
            cfg.rows,
            cfg.cols,
            walls.len(),
            weighted.len()
        );
        Ok(Scenario { grid, start, goal })
    }
}

/// Errors from [`ScenarioGen::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The requested grid has no cells.
    EmptyGrid { rows: i32, cols: i32 },
    /// Walls, weighted cells, start and goal do not fit.
    TooCrowded { needed: usize, available: usize },
    /// Weighted cells were requested but no weight above 1 is allowed.
    BadMaxWeight(i32),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => write!(f, "grid {rows}x{cols} has no cells"),
            Self::TooCrowded { needed, available } => write!(
                f,
                "scenario needs {needed} distinct cells but the grid has {available}"
            ),
            Self::BadMaxWeight(w) => write!(f, "max weight {w} leaves no weight above 1"),
        }
    }
}

impl std::error::Error for GenError {}
