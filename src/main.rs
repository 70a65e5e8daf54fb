use gridsearch_rust::common::verify_path;
use gridsearch_rust::config::{Cli, Config};
use gridsearch_rust::grid::Grid;
use gridsearch_rust::scenario::{generate_random_layout, Scenario};
use gridsearch_rust::solver::{
    a_star_search, bfs_search, dfs_search, exit_distance, goal_aware, iterative_deepening_search,
    null_heuristic, uniform_cost_search, Heuristic,
};
use gridsearch_rust::stat::Stats;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();
    let cli = Cli::parse();

    let config = Config::new(&cli);
    config.validate()?;

    let grid = if config.random {
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        let layout = generate_random_layout(config.rows, config.cols, config.wall_count, &mut rng)?;
        Grid::from_lines(&layout)?
    } else if let Some(scenario_path) = config.scenario_path.as_ref() {
        let scenario = Scenario::load_from_file(scenario_path)
            .with_context(|| format!("error with scenario file: {scenario_path}"))?;
        info!("running scenario {:?}", scenario.name);
        Grid::from_lines(&scenario.layout)?
    } else {
        Grid::from_file(&config.grid_path)?
    };
    info!(
        "grid {}x{}, start {}, exit {}, {} goals",
        grid.rows,
        grid.cols,
        grid.start,
        grid.exit,
        grid.goals.len()
    );

    let heuristic = match config.heuristic.as_str() {
        "null" => null_heuristic as Heuristic,
        "exit" => exit_distance,
        "goal-aware" => goal_aware,
        _ => unreachable!(),
    };

    for strategy in strategies(&config.strategy) {
        let mut stats = Stats::default();
        let path = match strategy {
            "bfs" => bfs_search(&grid, &mut stats),
            "dfs" => dfs_search(&grid, &mut stats),
            "iddfs" => iterative_deepening_search(&grid, config.max_depth, &mut stats),
            "ucs" => uniform_cost_search(&grid, &mut stats),
            "astar" => a_star_search(&grid, heuristic, &mut stats),
            _ => unreachable!(),
        };

        match path {
            Some(path) => {
                assert!(verify_path(&grid, &path));
                info!(
                    "{strategy}: {} steps: {:?}",
                    path.len() - 1,
                    path.iter()
                        .map(|p| (p.row, p.col))
                        .collect::<Vec<_>>()
                );
            }
            None => warn!("{strategy}: no path"),
        }
        stats.print(strategy);
    }

    Ok(())
}

fn strategies(selected: &str) -> Vec<&'static str> {
    match selected {
        "all" => vec!["bfs", "dfs", "iddfs", "ucs", "astar"],
        "bfs" => vec!["bfs"],
        "dfs" => vec!["dfs"],
        "iddfs" => vec!["iddfs"],
        "ucs" => vec!["ucs"],
        "astar" => vec!["astar"],
        _ => unreachable!(),
    }
}
