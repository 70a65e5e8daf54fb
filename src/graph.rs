use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, VecDeque};

use tracing::{debug, instrument};

use crate::stat::Stats;

/// Adjacency-list directed graph with small integer edge weights, the
/// graph-based counterpart of the grid searches. `BTreeMap` keeps neighbor
/// iteration deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    adjacency: BTreeMap<String, Vec<(String, usize)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: &str, to: &str, weight: usize) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
        // Make sure the target exists even if it has no outgoing edges.
        self.adjacency.entry(to.to_string()).or_default();
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Cheapest path by total edge weight. Cost ties in the heap break on
    /// node label, ascending. Returns the path and its cost, or `None` when
    /// start or goal is absent or the goal is unreachable.
    #[instrument(skip_all, name = "graph_uniform_cost_search", level = "debug")]
    pub fn uniform_cost_search(
        &self,
        start: &str,
        goal: &str,
        stats: &mut Stats,
    ) -> Option<(Vec<String>, usize)> {
        if !self.contains(start) || !self.contains(goal) {
            return None;
        }

        let mut cost_so_far: HashMap<&str, usize> = HashMap::new();
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut heap: BinaryHeap<(Reverse<usize>, Reverse<&str>)> = BinaryHeap::new();

        cost_so_far.insert(start, 0);
        heap.push((Reverse(0), Reverse(start)));

        while let Some((Reverse(cost), Reverse(node))) = heap.pop() {
            // Stale entry, a cheaper route was enqueued later.
            if cost > cost_so_far[node] {
                continue;
            }
            stats.expand_nodes += 1;
            debug!("expand graph node {node:?} at cost {cost}");

            if node == goal {
                return Some((construct_path(&parent, start, goal), cost));
            }

            for (next, weight) in &self.adjacency[node] {
                let next_cost = cost + weight;
                if next_cost < *cost_so_far.get(next.as_str()).unwrap_or(&usize::MAX) {
                    cost_so_far.insert(next, next_cost);
                    parent.insert(next, node);
                    heap.push((Reverse(next_cost), Reverse(next.as_str())));
                }
            }
        }

        None
    }

    /// Fewest-edges path, ignoring weights; the returned cost is the edge
    /// count.
    #[instrument(skip_all, name = "graph_bfs_search", level = "debug")]
    pub fn bfs_search(
        &self,
        start: &str,
        goal: &str,
        stats: &mut Stats,
    ) -> Option<(Vec<String>, usize)> {
        if !self.contains(start) || !self.contains(goal) {
            return None;
        }

        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        parent.insert(start, start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            stats.expand_nodes += 1;
            if node == goal {
                let path = construct_path(&parent, start, goal);
                let edges = path.len() - 1;
                return Some((path, edges));
            }
            for (next, _) in &self.adjacency[node] {
                if !parent.contains_key(next.as_str()) {
                    parent.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

fn construct_path(parent: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        current = parent[current];
        path.push(current.to_string());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "C", 4);
        graph.add_edge("B", "C", 2);
        graph.add_edge("B", "D", 5);
        graph.add_edge("C", "D", 1);
        graph
    }

    #[test]
    fn test_ucs_prefers_cheapest_route() {
        let graph = sample_graph();
        let mut stats = Stats::default();
        let (path, cost) = graph.uniform_cost_search("A", "D", &mut stats).unwrap();
        assert_eq!(path, vec!["A", "B", "C", "D"]);
        assert_eq!(cost, 4);
        assert!(stats.expand_nodes > 0);
    }

    #[test]
    fn test_bfs_prefers_fewest_edges() {
        let graph = sample_graph();
        let mut stats = Stats::default();
        let (path, edges) = graph.bfs_search("A", "D", &mut stats).unwrap();
        assert_eq!(path, vec!["A", "B", "D"]);
        assert_eq!(edges, 2);
    }

    #[test]
    fn test_missing_node_returns_none() {
        let graph = sample_graph();
        assert!(graph
            .uniform_cost_search("A", "Z", &mut Stats::default())
            .is_none());
        assert!(graph.bfs_search("Z", "A", &mut Stats::default()).is_none());
    }

    #[test]
    fn test_unreachable_goal_returns_none() {
        let mut graph = sample_graph();
        // "X" has an outgoing edge but no incoming ones.
        graph.add_edge("X", "A", 1);
        assert!(graph
            .uniform_cost_search("A", "X", &mut Stats::default())
            .is_none());
    }

    #[test]
    fn test_trivial_start_is_goal() {
        let graph = sample_graph();
        let (path, cost) = graph
            .uniform_cost_search("A", "A", &mut Stats::default())
            .unwrap();
        assert_eq!(path, vec!["A"]);
        assert_eq!(cost, 0);
    }
}
