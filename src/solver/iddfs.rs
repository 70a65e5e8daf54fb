use std::rc::Rc;

use tracing::{debug, instrument};

use crate::common::{reconstruct_path, Point, SearchNode, SearchState};
use crate::grid::Grid;
use crate::stat::Stats;

/// Iterative deepening: depth-limited DFS rerun with bounds 1..=max_depth.
/// The first bound that admits a goal-collecting path returns it, so the
/// result has the fewest possible steps. `None` means no path within
/// `max_depth`; the caller may retry with a larger bound. Expansion counts
/// accumulate across all passes.
#[instrument(skip_all, name = "iterative_deepening_search", level = "debug")]
pub fn iterative_deepening_search(
    grid: &Grid,
    max_depth: usize,
    stats: &mut Stats,
) -> Option<Vec<Point>> {
    for bound in 1..=max_depth {
        debug!("depth-limited pass with bound {bound}");
        if let Some(path) = depth_limited_search(grid, bound, stats) {
            return Some(path);
        }
    }
    None
}

struct Frame {
    node: Rc<SearchNode>,
    remaining: usize,
}

/// Depth-limited DFS over an explicit frame stack, never the native call
/// stack. `remaining` counts the moves still allowed below a frame. The
/// cycle check walks the node's ancestor chain, which is exactly the
/// path-so-far for that frame.
fn depth_limited_search(grid: &Grid, bound: usize, stats: &mut Stats) -> Option<Vec<Point>> {
    let mut stack = vec![Frame {
        node: SearchNode::root(grid),
        remaining: bound,
    }];

    while let Some(Frame { node, remaining }) = stack.pop() {
        stats.expand_nodes += 1;
        if node.state.is_complete(grid) {
            return Some(reconstruct_path(&node));
        }
        if remaining == 0 {
            continue;
        }

        // Reversed push keeps the first-enumerated neighbor on top, matching
        // DFS branch order.
        for (next_pos, action) in grid.neighbors(node.state.position).into_iter().rev() {
            let next_state = node.state.advance(next_pos, grid);
            if on_current_path(&node, &next_state) {
                continue;
            }
            stack.push(Frame {
                node: node.child(next_state, node.cost + 1, action),
                remaining: remaining - 1,
            });
        }
    }

    None
}

fn on_current_path(node: &Rc<SearchNode>, state: &SearchState) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n.state == *state {
            return true;
        }
        current = n.parent.as_ref();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::verify_path;
    use crate::solver::bfs_search;

    #[test]
    fn test_iddfs_finds_shortest_path() {
        let grid = Grid::from_lines(&["S.G.#", "..#..", "..#E.", "....."]).unwrap();
        let mut stats = Stats::default();
        let path = iterative_deepening_search(&grid, 64, &mut stats).unwrap();
        assert!(verify_path(&grid, &path));

        // Bounds grow one step at a time, so the first hit is optimal.
        let bfs_path = bfs_search(&grid, &mut Stats::default()).unwrap();
        assert_eq!(path.len(), bfs_path.len());
    }

    #[test]
    fn test_iddfs_respects_depth_bound() {
        // Shortest goal-collecting path is 3 steps.
        let grid = Grid::from_lines(&["S.G", "..E"]).unwrap();
        assert!(iterative_deepening_search(&grid, 2, &mut Stats::default()).is_none());

        let path = iterative_deepening_search(&grid, 3, &mut Stats::default()).unwrap();
        assert_eq!(path.len(), 4);
        assert!(verify_path(&grid, &path));
    }

    #[test]
    fn test_iddfs_unreachable_exit() {
        let grid = Grid::from_lines(&["S#G", "#E#"]).unwrap();
        assert!(iterative_deepening_search(&grid, 16, &mut Stats::default()).is_none());
    }
}
