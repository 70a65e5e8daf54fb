use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::grid::Grid;

/// Grid coordinate, row-major. Ordered lexicographically (row, then col) so
/// that equal-priority frontier entries break ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Action label attached to a move, kept on the node for path annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Composite search state: position plus the set of goals collected so far.
///
/// A position revisited with a different collected-set is a different state,
/// so every visited-set and cost table keys on the whole struct. The
/// collected-set lives behind an `Rc` to share it between all states along a
/// path segment that collects nothing new.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    pub position: Point,
    pub collected: Rc<BTreeSet<Point>>,
}

impl SearchState {
    pub fn initial(grid: &Grid) -> Self {
        SearchState {
            position: grid.start,
            collected: Rc::new(BTreeSet::new()),
        }
    }

    /// Goal transition: moving onto an uncollected goal yields a fresh
    /// collected-set with it added; any other move shares the existing set.
    /// States are never mutated in place, they are shared as table keys and
    /// frontier entries.
    pub fn advance(&self, next: Point, grid: &Grid) -> SearchState {
        let collected = if grid.goals.contains(&next) && !self.collected.contains(&next) {
            let mut extended = (*self.collected).clone();
            extended.insert(next);
            Rc::new(extended)
        } else {
            Rc::clone(&self.collected)
        };
        SearchState {
            position: next,
            collected,
        }
    }

    /// Terminal test: standing on the exit with every goal collected.
    pub fn is_complete(&self, grid: &Grid) -> bool {
        self.position == grid.exit && *self.collected == grid.goals
    }
}

/// Node of the search tree. Parent links form a tree rooted at the start
/// state; the whole tree is dropped once a search returns.
#[derive(Debug)]
pub struct SearchNode {
    pub state: SearchState,
    pub cost: usize,
    pub action: Option<Direction>,
    pub parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    pub fn root(grid: &Grid) -> Rc<Self> {
        Rc::new(SearchNode {
            state: SearchState::initial(grid),
            cost: 0,
            action: None,
            parent: None,
        })
    }

    pub fn child(self: &Rc<Self>, state: SearchState, cost: usize, action: Direction) -> Rc<Self> {
        Rc::new(SearchNode {
            state,
            cost,
            action: Some(action),
            parent: Some(Rc::clone(self)),
        })
    }
}

/// Walks parent links back to the root and returns the positions in
/// start-to-terminal order.
pub fn reconstruct_path(node: &Rc<SearchNode>) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(n) = current {
        path.push(n.state.position);
        current = n.parent.as_ref();
    }
    path.reverse();
    path
}

/// Checks that a returned path is well-formed: starts at Start, ends at
/// Exit, every step is a unit axis move onto a valid cell, and every goal
/// appears somewhere on it.
pub fn verify_path(grid: &Grid, path: &[Point]) -> bool {
    let (first, last) = match (path.first(), path.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return false,
    };
    if first != grid.start || last != grid.exit {
        return false;
    }
    for pair in path.windows(2) {
        let step = pair[0].row.abs_diff(pair[1].row) + pair[0].col.abs_diff(pair[1].col);
        if step != 1 || !grid.is_valid(pair[1]) {
            return false;
        }
    }
    grid.goals.iter().all(|goal| path.contains(goal))
}
