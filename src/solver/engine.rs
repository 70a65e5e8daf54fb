use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, instrument, trace};

use crate::common::{reconstruct_path, Point, SearchNode, SearchState};
use crate::grid::Grid;
use crate::solver::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::solver::heuristic::{null_heuristic, Heuristic};
use crate::stat::Stats;

/// Breadth-first search: FIFO frontier, visited-set dedup. Finds a
/// fewest-steps goal-collecting path on unit-cost grids.
#[instrument(skip_all, name = "bfs_search", level = "debug")]
pub fn bfs_search(grid: &Grid, stats: &mut Stats) -> Option<Vec<Point>> {
    run_search(grid, FifoFrontier::default(), null_heuristic, stats)
}

/// Depth-first search: LIFO frontier, visited-set dedup. Branch order follows
/// the grid's Up/Down/Left/Right neighbor enumeration; the returned path may
/// be longer than optimal.
#[instrument(skip_all, name = "dfs_search", level = "debug")]
pub fn dfs_search(grid: &Grid, stats: &mut Stats) -> Option<Vec<Point>> {
    run_search(grid, LifoFrontier::default(), null_heuristic, stats)
}

/// Uniform-cost search: priority frontier ordered by cumulative cost alone.
#[instrument(skip_all, name = "uniform_cost_search", level = "debug")]
pub fn uniform_cost_search(grid: &Grid, stats: &mut Stats) -> Option<Vec<Point>> {
    run_search(grid, PriorityFrontier::default(), null_heuristic, stats)
}

/// A*: priority frontier ordered by cumulative cost plus the heuristic
/// estimate. Optimality holds only when the heuristic never overestimates;
/// see the notes on each heuristic in [`crate::solver::heuristic`].
#[instrument(skip_all, name = "a_star_search", level = "debug")]
pub fn a_star_search(grid: &Grid, heuristic: Heuristic, stats: &mut Stats) -> Option<Vec<Point>> {
    run_search(grid, PriorityFrontier::default(), heuristic, stats)
}

/// The one expand/generate/test loop behind all four strategies.
///
/// Cost-ordered frontiers keep a best-known-cost table per composite state,
/// written at enqueue time; a popped node whose cost exceeds its table entry
/// is a stale duplicate and is skipped. FIFO/LIFO frontiers instead mark
/// states visited at pop and enqueue successors unconditionally. Exhausting
/// the frontier without reaching a terminal state is a normal `None` result.
///
/// The node tree can hold one node per reachable composite state, which is
/// |free cells| x 2^|goals| in the worst case; callers keep goal counts
/// small, the engine imposes no cap of its own.
fn run_search<F: Frontier>(
    grid: &Grid,
    mut frontier: F,
    heuristic: Heuristic,
    stats: &mut Stats,
) -> Option<Vec<Point>> {
    let root = SearchNode::root(grid);
    let mut visited: HashSet<SearchState> = HashSet::new();
    let mut best_cost: HashMap<SearchState, usize> = HashMap::new();

    let root_h = heuristic(root.state.position, &root.state.collected, grid);
    if frontier.ordered_by_cost() {
        best_cost.insert(root.state.clone(), 0);
    }
    frontier.push(Rc::clone(&root), root_h);

    while let Some(current) = frontier.pop() {
        // Re-expansion guard.
        if frontier.ordered_by_cost() {
            if best_cost
                .get(&current.state)
                .is_some_and(|&best| best < current.cost)
            {
                continue;
            }
        } else if !visited.insert(current.state.clone()) {
            continue;
        }

        stats.expand_nodes += 1;
        debug!(
            "expand node: {} cost {} collected {}",
            current.state.position,
            current.cost,
            current.state.collected.len()
        );

        if current.state.is_complete(grid) {
            return Some(reconstruct_path(&current));
        }

        let next_cost = current.cost + 1; // uniform grid-move cost
        let mut successors = Vec::with_capacity(4);
        for (next_pos, action) in grid.neighbors(current.state.position) {
            let next_state = current.state.advance(next_pos, grid);
            if frontier.ordered_by_cost() {
                let old_cost = best_cost.get(&next_state).copied().unwrap_or(usize::MAX);
                if next_cost >= old_cost {
                    continue;
                }
                best_cost.insert(next_state.clone(), next_cost);
                let h = heuristic(next_state.position, &next_state.collected, grid);
                successors.push((current.child(next_state, next_cost, action), next_cost + h));
            } else {
                successors.push((current.child(next_state, next_cost, action), 0));
            }
        }
        frontier.extend(successors);
        trace!("frontier extended from {}", current.state.position);
    }

    None
}
