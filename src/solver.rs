mod engine;
mod frontier;
mod heuristic;
mod iddfs;

pub use engine::{a_star_search, bfs_search, dfs_search, uniform_cost_search};
pub use heuristic::{exit_distance, goal_aware, manhattan, null_heuristic, Heuristic};
pub use iddfs::iterative_deepening_search;
