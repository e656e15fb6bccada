//! Shared code for the wayfind command-line demo.
//!
//! The binary builds a [`Scenario`] (random or from a layout file), runs one
//! or more [`Strategy`] values over it and prints the rendered results. Wall
//! toggles are applied one at a time, and every search runs again after
//! each edit.

use std::fmt;
use std::time::{Duration, Instant};

use wayfind_core::Cell;
use wayfind_gen::Scenario;
use wayfind_paths::{Strategy, path_cost};

/// Which strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Strategy),
    All,
}

impl std::str::FromStr for Selection {
    type Err = wayfind_paths::ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

/// Demo settings not covered by [`wayfind_gen::GenConfig`].
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub selection: Selection,
    /// Largest grid (in cells) on which exhaustive strategies run when
    /// every strategy is selected.
    pub exhaustive_limit: usize,
    /// Print the rendered grid for each strategy.
    pub render: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            exhaustive_limit: 36,
            render: true,
        }
    }
}

/// Outcome of one strategy on one scenario.
#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: Strategy,
    pub path: Vec<Cell>,
    pub cost: i64,
    pub elapsed: Duration,
}

impl Report {
    /// Whether a path was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found() {
            write!(
                f,
                "{:<12} steps {:>4}  cost {:>5}  {:>9.3?}",
                self.strategy.name(),
                self.path.len() - 1,
                self.cost,
                self.elapsed
            )
        } else {
            write!(
                f,
                "{:<12} no path          {:>9.3?}",
                self.strategy.name(),
                self.elapsed
            )
        }
    }
}

/// The strategies `config` selects for `scenario`.
///
/// Exhaustive strategies are left out of [`Selection::All`] on grids larger
/// than [`DemoConfig::exhaustive_limit`]. An explicit single strategy always
/// runs.
pub fn plan(scenario: &Scenario, config: &DemoConfig) -> Vec<Strategy> {
    match config.selection {
        Selection::One(st) => vec![st],
        Selection::All => {
            let big = scenario.grid.len() > config.exhaustive_limit;
            Strategy::ALL
                .into_iter()
                .filter(|st| {
                    let skip = big && st.is_exhaustive();
                    if skip {
                        log::warn!(
                            "skipping {st}: {} cells exceeds exhaustive limit {}",
                            scenario.grid.len(),
                            config.exhaustive_limit
                        );
                    }
                    !skip
                })
                .collect()
        }
    }
}

/// Run each strategy once.
pub fn run(scenario: &Scenario, strategies: &[Strategy]) -> Vec<Report> {
    strategies
        .iter()
        .map(|&strategy| {
            let t0 = Instant::now();
            let path = strategy.find(&scenario.grid, scenario.start, scenario.goal);
            let elapsed = t0.elapsed();
            let cost = path_cost(&scenario.grid, &path);
            Report {
                strategy,
                path,
                cost,
                elapsed,
            }
        })
        .collect()
}

/// Parse a `row,col` pair.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = r
        .trim()
        .parse()
        .map_err(|e| format!("bad row \u{201c}{r}\u{201d}: {e}"))?;
    let col = c
        .trim()
        .parse()
        .map_err(|e| format!("bad column \u{201c}{c}\u{201d}: {e}"))?;
    Ok(Cell::new(row, col))
}
