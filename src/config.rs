use anyhow::{anyhow, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "Rust Grid Search",
    about = "Kinds of state-space search algorithm implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Path to the grid layout file",
        default_value = "grid_file/simple.grid"
    )]
    pub grid_path: String,

    #[arg(long, help = "Path to a YAML scenario file (overrides --grid-path)")]
    pub scenario_path: Option<String>,

    #[arg(
        long,
        help = "Search strategy: bfs, dfs, iddfs, ucs, astar or all",
        default_value = "all"
    )]
    pub strategy: String,

    #[arg(
        long,
        help = "Heuristic for A*: null, exit or goal-aware",
        default_value = "goal-aware"
    )]
    pub heuristic: String,

    #[arg(
        long,
        help = "Depth bound for iterative deepening",
        default_value_t = 64
    )]
    pub max_depth: usize,

    #[arg(
        long,
        help = "Generate a random grid instead of loading one",
        default_value_t = false
    )]
    pub random: bool,

    #[arg(long, help = "Rows of the generated grid", default_value_t = 15)]
    pub rows: usize,

    #[arg(long, help = "Columns of the generated grid", default_value_t = 15)]
    pub cols: usize,

    #[arg(
        long,
        help = "Wall cells in the generated grid",
        default_value_t = 40
    )]
    pub wall_count: usize,

    #[arg(
        long,
        help = "Seed for the random number generator",
        default_value_t = 0
    )]
    pub seed: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub grid_path: String,
    pub scenario_path: Option<String>,
    pub strategy: String,
    pub heuristic: String,
    pub max_depth: usize,
    pub random: bool,
    pub rows: usize,
    pub cols: usize,
    pub wall_count: usize,
    pub seed: usize,
}

impl Config {
    pub fn new(cli: &Cli) -> Self {
        Self {
            grid_path: cli.grid_path.clone(),
            scenario_path: cli.scenario_path.clone(),
            strategy: cli.strategy.clone(),
            heuristic: cli.heuristic.clone(),
            max_depth: cli.max_depth,
            random: cli.random,
            rows: cli.rows,
            cols: cli.cols,
            wall_count: cli.wall_count,
            seed: cli.seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.strategy.as_str() {
            "bfs" | "dfs" | "iddfs" | "ucs" | "astar" | "all" => {}
            other => {
                return Err(anyhow!(
                    "unknown strategy {other:?}, expected bfs, dfs, iddfs, ucs, astar or all"
                ))
            }
        }

        match self.heuristic.as_str() {
            "null" | "exit" | "goal-aware" => {}
            other => {
                return Err(anyhow!(
                    "unknown heuristic {other:?}, expected null, exit or goal-aware"
                ))
            }
        }

        if self.max_depth == 0 {
            return Err(anyhow!("max depth must be at least 1"));
        }

        if self.random && (self.rows < 2 || self.cols < 2) {
            return Err(anyhow!(
                "random grid needs at least 2x2 cells, got {}x{}",
                self.rows,
                self.cols
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            grid_path: "grid_file/simple.grid".to_string(),
            scenario_path: None,
            strategy: "all".to_string(),
            heuristic: "goal-aware".to_string(),
            max_depth: 64,
            random: false,
            rows: 15,
            cols: 15,
            wall_count: 40,
            seed: 0,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_strategy() {
        let mut config = base_config();
        config.strategy = "dijkstra".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_heuristic() {
        let mut config = base_config();
        config.heuristic = "euclidean".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_random_grid() {
        let mut config = base_config();
        config.random = true;
        config.rows = 1;
        assert!(config.validate().is_err());
    }
}
