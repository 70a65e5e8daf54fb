use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::prelude::*;
use serde::Deserialize;

/// Named grid layout loaded from a YAML file.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub layout: Vec<String>,
}

impl Scenario {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Scenario> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open scenario file {path:?}"))?;
        let reader = BufReader::new(file);
        let scenario = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario file {path:?}"))?;
        Ok(scenario)
    }
}

/// Builds a goal-free layout with `S` in the top-left corner, `E` in the
/// bottom-right corner and `wall_count` walls placed by shuffling the
/// remaining cells with the caller's generator and taking a prefix. The same
/// seed always yields the same layout.
pub fn generate_random_layout<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    wall_count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if rows < 2 || cols < 2 {
        bail!("random layout needs at least 2x2 cells, got {rows}x{cols}");
    }
    let start = (0, 0);
    let exit = (rows - 1, cols - 1);

    let mut candidates: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&cell| cell != start && cell != exit)
        .collect();
    if wall_count > candidates.len() {
        bail!(
            "wall count {wall_count} exceeds the {} placeable cells",
            candidates.len()
        );
    }
    candidates.shuffle(rng);
    let walls: HashSet<(usize, usize)> = candidates.into_iter().take(wall_count).collect();

    let layout = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if (r, c) == start {
                        'S'
                    } else if (r, c) == exit {
                        'E'
                    } else if walls.contains(&(r, c)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect();
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point;
    use crate::grid::Grid;
    use rand::rngs::StdRng;

    #[test]
    fn test_scenario_from_yaml_str() {
        let yaml = "name: simple\nlayout:\n  - \"S.G\"\n  - \"..E\"\n";
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "simple");
        assert_eq!(scenario.layout, vec!["S.G", "..E"]);
        assert!(Grid::from_lines(&scenario.layout).is_ok());
    }

    #[test]
    fn test_load_scenario_file() {
        let scenario = Scenario::load_from_file("grid_file/simple.yaml").unwrap();
        let grid = Grid::from_lines(&scenario.layout).unwrap();
        assert_eq!(grid.start, Point::new(0, 0));
        assert_eq!(grid.goals.len(), 1);
    }

    #[test]
    fn test_random_layout_is_seed_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let layout_a = generate_random_layout(15, 15, 40, &mut rng_a).unwrap();
        let layout_b = generate_random_layout(15, 15, 40, &mut rng_b).unwrap();
        assert_eq!(layout_a, layout_b);
    }

    #[test]
    fn test_random_layout_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = generate_random_layout(8, 10, 12, &mut rng).unwrap();
        assert_eq!(layout.len(), 8);
        assert!(layout.iter().all(|row| row.chars().count() == 10));

        let walls: usize = layout
            .iter()
            .map(|row| row.chars().filter(|&ch| ch == '#').count())
            .sum();
        assert_eq!(walls, 12);

        let grid = Grid::from_lines(&layout).unwrap();
        assert_eq!(grid.start, Point::new(0, 0));
        assert_eq!(grid.exit, Point::new(7, 9));
        assert!(grid.goals.is_empty());
    }

    #[test]
    fn test_too_many_walls_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_random_layout(3, 3, 8, &mut rng).is_err());
        assert!(generate_random_layout(3, 3, 7, &mut rng).is_ok());
        assert!(generate_random_layout(1, 5, 0, &mut rng).is_err());
    }
}
