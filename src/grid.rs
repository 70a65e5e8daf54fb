use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::common::{Direction, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Wall,
    Start,
    Exit,
    /// Goal with its priority, 1..=9. Priority is metadata only, it never
    /// feeds into path cost.
    Goal(u8),
}

/// Rectangular cell layout, immutable after construction.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Vec<Cell>>,
    pub start: Point,
    pub exit: Point,
    /// The full goal set, doubling as the "all collected" membership test.
    pub goals: BTreeSet<Point>,
    pub priorities: BTreeMap<Point, u8>,
}

const MOVES: [(i32, i32, Direction); 4] = [
    (-1, 0, Direction::Up),
    (1, 0, Direction::Down),
    (0, -1, Direction::Left),
    (0, 1, Direction::Right),
];

impl Grid {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open grid file {path:?}"))?;
        let reader = BufReader::new(file);
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("failed to read grid file {path:?}"))?;
        Self::from_lines(&lines)
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let rows = lines.len();
        if rows == 0 {
            bail!("grid layout is empty");
        }
        let cols = lines[0].as_ref().chars().count();
        if cols == 0 {
            bail!("grid layout has an empty first row");
        }

        let mut cells = Vec::with_capacity(rows);
        let mut start = None;
        let mut exit = None;
        let mut goals = BTreeSet::new();
        let mut priorities = BTreeMap::new();

        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                bail!("grid row {r} has {} cells, expected {cols}", line.chars().count());
            }
            let mut row = Vec::with_capacity(cols);
            for (c, ch) in line.chars().enumerate() {
                let pos = Point::new(r, c);
                let cell = match ch {
                    '.' => Cell::Free,
                    '#' => Cell::Wall,
                    'S' => {
                        if start.replace(pos).is_some() {
                            bail!("grid has more than one start marker 'S'");
                        }
                        Cell::Start
                    }
                    'E' => {
                        if exit.replace(pos).is_some() {
                            bail!("grid has more than one exit marker 'E'");
                        }
                        Cell::Exit
                    }
                    'G' => {
                        goals.insert(pos);
                        priorities.insert(pos, 1);
                        Cell::Goal(1)
                    }
                    '1'..='9' => {
                        let priority = ch.to_digit(10).unwrap() as u8;
                        goals.insert(pos);
                        priorities.insert(pos, priority);
                        Cell::Goal(priority)
                    }
                    other => bail!("unknown grid symbol {other:?} at row {r}, col {c}"),
                };
                row.push(cell);
            }
            cells.push(row);
        }

        let Some(start) = start else {
            bail!("start marker 'S' not found in grid");
        };
        let Some(exit) = exit else {
            bail!("exit marker 'E' not found in grid");
        };
        if goals.is_empty() {
            warn!("no goal markers ('G' or '1'-'9') in grid, search degenerates to shortest-path");
        }

        Ok(Grid {
            rows,
            cols,
            cells,
            start,
            exit,
            goals,
            priorities,
        })
    }

    pub fn cell(&self, pos: Point) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// In bounds and not a wall.
    pub fn is_valid(&self, pos: Point) -> bool {
        pos.row < self.rows && pos.col < self.cols && self.cells[pos.row][pos.col] != Cell::Wall
    }

    /// The valid axis-aligned neighbors of `pos`, always enumerated Up, Down,
    /// Left, Right. This order fixes DFS branch order and which of several
    /// equal-cost paths a search returns, so it is observable behavior.
    pub fn neighbors(&self, pos: Point) -> Vec<(Point, Direction)> {
        let mut neighbors = Vec::with_capacity(4);
        for &(dr, dc, direction) in &MOVES {
            let new_row = pos.row as i32 + dr;
            let new_col = pos.col as i32 + dc;
            if new_row < 0 || new_col < 0 {
                continue;
            }
            let next = Point::new(new_row as usize, new_col as usize);
            if self.is_valid(next) {
                neighbors.push((next, direction));
            }
        }
        neighbors
    }
}
