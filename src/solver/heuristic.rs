use std::collections::BTreeSet;

use crate::common::Point;
use crate::grid::Grid;

/// Estimate of the remaining cost from a position with a given collected-set.
pub type Heuristic = fn(Point, &BTreeSet<Point>, &Grid) -> usize;

pub fn manhattan(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Always zero. Reduces A* to uniform-cost search; the correctness baseline
/// the other heuristics are compared against.
pub fn null_heuristic(_position: Point, _collected: &BTreeSet<Point>, _grid: &Grid) -> usize {
    0
}

/// Manhattan distance to the exit, ignoring goals entirely. Only a meaningful
/// estimate of the collect-everything-then-exit objective once all goals are
/// already collected; before that it says nothing about the detours still
/// owed, so do not read A* results under it as optimal for the collection
/// objective.
pub fn exit_distance(position: Point, _collected: &BTreeSet<Point>, grid: &Grid) -> usize {
    manhattan(position, grid.exit)
}

/// Exit distance plus a +1 charge per uncollected goal, falling back to plain
/// exit distance once everything is collected.
///
/// Deliberately inadmissible: the remaining-goal count can push the estimate
/// above the true remaining cost (stand next to the last goal with the exit
/// one step past it and the estimate is already high by one). It buys faster
/// searches at the price of the optimality guarantee, which is the point of
/// comparing it against [`null_heuristic`].
pub fn goal_aware(position: Point, collected: &BTreeSet<Point>, grid: &Grid) -> usize {
    let remaining = grid.goals.difference(collected).count();
    manhattan(position, grid.exit) + remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_lines(&["S.G.#", "..#..", "..#E.", "....."]).unwrap()
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 3)), 5);
        assert_eq!(manhattan(Point::new(2, 3), Point::new(0, 0)), 5);
        assert_eq!(manhattan(Point::new(1, 1), Point::new(1, 1)), 0);
    }

    #[test]
    fn test_null_heuristic_is_zero() {
        let grid = sample_grid();
        assert_eq!(null_heuristic(Point::new(0, 0), &BTreeSet::new(), &grid), 0);
    }

    #[test]
    fn test_exit_distance_ignores_goals() {
        let grid = sample_grid();
        let empty = BTreeSet::new();
        assert_eq!(exit_distance(Point::new(0, 0), &empty, &grid), 5);
        assert_eq!(exit_distance(grid.exit, &empty, &grid), 0);
    }

    #[test]
    fn test_goal_aware_charges_remaining_goals() {
        let grid = sample_grid();
        let none_collected = BTreeSet::new();
        assert_eq!(goal_aware(Point::new(0, 0), &none_collected, &grid), 6);

        let all_collected = grid.goals.clone();
        assert_eq!(goal_aware(Point::new(0, 0), &all_collected, &grid), 5);
        assert_eq!(goal_aware(grid.exit, &all_collected, &grid), 0);
    }
}
