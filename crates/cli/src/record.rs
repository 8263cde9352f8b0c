//! JSON rows written by the CLI, one per solved grid.

use rodmaze::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Step {
    pub row: i32,
    pub col: i32,
    pub orientation: &'static str,
}

impl From<&Configuration> for Step {
    fn from(c: &Configuration) -> Self {
        Self {
            row: c.center.row,
            col: c.center.col,
            orientation: match c.orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolveRecord {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// Chosen path length minus one, or -1.
    pub moves: i64,
    pub finish: Option<&'static str>,
    pub expanded: usize,
    /// BFS shortest over both finishes; only when requested.
    pub optimum: Option<i64>,
    pub path: Vec<Step>,
}

impl SolveRecord {
    pub fn new(name: impl Into<String>, grid: &Grid, solution: &Solution) -> Self {
        Self {
            name: name.into(),
            rows: grid.rows(),
            cols: grid.cols(),
            moves: solution.move_count(),
            finish: solution.chosen().map(|o| match o {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            }),
            expanded: solution.expanded(),
            optimum: None,
            path: solution
                .best()
                .map(|p| p.iter().map(Step::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Exact optimum over both finishes by breadth-first search, or `NO_SOLUTION`.
pub fn optimum(grid: &Grid, start: Configuration) -> Result<i64, SearchError> {
    let mut best = NO_SOLUTION;
    for goal in goals(grid) {
        if let Some(p) = bfs_path(grid, start, goal)? {
            let m = p.move_count() as i64;
            if best == NO_SOLUTION || m < best {
                best = m;
            }
        }
    }
    Ok(best)
}
