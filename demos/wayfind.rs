//! `wayfind`: run grid path searches from the command line.
//!
//! ```text
//! wayfind --rows 12 --cols 20 --walls 60 --seed 7
//! wayfind --map maze.txt --strategy astar --toggle 3,4 --toggle 5,5
//! RUST_LOG=debug wayfind --strategy bfs
//! ```

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_core::Cell;
use wayfind_demos::{DemoConfig, Selection, parse_cell, plan, run};
use wayfind_gen::{GenConfig, Scenario, ScenarioGen};

#[derive(Parser, Debug)]
#[command(version, about = "Grid path search demo")]
struct Cli {
    /// Load the scenario from a layout file instead of generating one.
    #[arg(long)]
    map: Option<PathBuf>,
    #[arg(long, default_value_t = 10)]
    rows: i32,
    #[arg(long, default_value_t = 10)]
    cols: i32,
    /// Number of random walls.
    #[arg(long, default_value_t = 19)]
    walls: usize,
    /// Number of random weighted cells.
    #[arg(long, default_value_t = 0)]
    weighted: usize,
    #[arg(long, default_value_t = 9)]
    max_weight: i32,
    /// Seed for reproducible scenarios.
    #[arg(long)]
    seed: Option<u64>,
    /// Strategy name, or "all".
    #[arg(short, long, default_value = "all")]
    strategy: Selection,
    /// Move the start cell (ROW,COL).
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,
    /// Move the goal cell (ROW,COL).
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,
    /// Toggle a wall (ROW,COL) and search again. Repeatable.
    #[arg(long = "toggle", value_parser = parse_cell)]
    toggles: Vec<Cell>,
    /// Largest grid, in cells, on which "all" includes exhaustive searches.
    #[arg(long, default_value_t = 36)]
    exhaustive_limit: usize,
    /// Only print the summary lines.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn gen_config(&self) -> GenConfig {
        GenConfig {
            rows: self.rows,
            cols: self.cols,
            walls: self.walls,
            weighted: self.weighted,
            max_weight: self.max_weight,
        }
    }

    fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            selection: self.strategy,
            exhaustive_limit: self.exhaustive_limit,
            render: !self.quiet,
        }
    }

    fn scenario(&self) -> Result<Scenario, Box<dyn std::error::Error>> {
        if let Some(path) = &self.map {
            let text = std::fs::read_to_string(path)?;
            log::info!("loaded layout from {}", path.display());
            return Ok(Scenario::parse(&text)?);
        }
        let config = self.gen_config();
        let scenario = match self.seed {
            Some(seed) => ScenarioGen::new(config, StdRng::seed_from_u64(seed)).generate()?,
            None => ScenarioGen::new(config, rand::rng()).generate()?,
        };
        Ok(scenario)
    }
}

fn search_all(scenario: &Scenario, config: &DemoConfig) {
    if let Err(e) = scenario.validate() {
        log::warn!("{e}; searches will report no path");
    }
    for report in run(scenario, &plan(scenario, config)) {
        if config.render {
            println!("{}\n", scenario.render(&report.path));
        }
        println!("{report}");
        if config.render {
            println!();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.demo_config();

    let mut scenario = cli.scenario()?;
    if let Some(start) = cli.start {
        scenario.start = start;
    }
    if let Some(goal) = cli.goal {
        scenario.goal = goal;
    }

    println!(
        "{}x{} grid, {} walls, {} -> {}",
        scenario.grid.rows(),
        scenario.grid.cols(),
        scenario.grid.wall_count(),
        scenario.start,
        scenario.goal
    );
    search_all(&scenario, &config);

    for &cell in &cli.toggles {
        let now_wall = scenario.grid.toggle_wall(cell);
        println!(
            "== toggled {cell}: {}",
            if now_wall { "wall" } else { "open" }
        );
        search_all(&scenario, &config);
    }
    Ok(())
}
