//! Run the search toward both bottom-right goals and keep the shorter path.
//!
//! The rod finishes either vertical against the right edge, centered at
//! `(rows-2, cols-1)`, or horizontal against the bottom edge, centered at
//! `(rows-1, cols-2)`. The vertical result wins ties.

use crate::grid::Grid;
use crate::search::{search_report, Path, SearchCfg, SearchError, SearchReport};
use crate::state::{Configuration, Orientation};

/// Move count reported when neither goal is reachable.
pub const NO_SOLUTION: i64 = -1;

/// Conventional start: horizontal rod in the top-left corner.
pub const DEFAULT_START: Configuration = Configuration::horizontal(0, 1);

/// The two goal configurations for `grid`: `[vertical, horizontal]`.
pub fn goals(grid: &Grid) -> [Configuration; 2] {
    let (r, c) = (grid.row_bound(), grid.col_bound());
    [
        Configuration::vertical(r - 2, c - 1),
        Configuration::horizontal(r - 1, c - 2),
    ]
}

/// One search toward one goal.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub goal: Configuration,
    pub report: SearchReport,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub vertical: Candidate,
    pub horizontal: Candidate,
}

impl Solution {
    /// Orientation of the chosen goal, `None` if neither is reachable.
    pub fn chosen(&self) -> Option<Orientation> {
        match (&self.vertical.report.path, &self.horizontal.report.path) {
            (Some(v), Some(h)) if h.len() < v.len() => Some(Orientation::Horizontal),
            (Some(_), _) => Some(Orientation::Vertical),
            (None, Some(_)) => Some(Orientation::Horizontal),
            (None, None) => None,
        }
    }

    pub fn best(&self) -> Option<&Path> {
        match self.chosen()? {
            Orientation::Vertical => self.vertical.report.path.as_ref(),
            Orientation::Horizontal => self.horizontal.report.path.as_ref(),
        }
    }

    /// Moves on the chosen path, or `NO_SOLUTION`.
    pub fn move_count(&self) -> i64 {
        self.best().map_or(NO_SOLUTION, |p| p.move_count() as i64)
    }

    /// Total expansions over both searches.
    pub fn expanded(&self) -> usize {
        self.vertical.report.expanded + self.horizontal.report.expanded
    }
}

pub fn solve(grid: &Grid, start: Configuration) -> Result<Solution, SearchError> {
    solve_with_cfg(grid, start, SearchCfg::default())
}

/// Both searches share `cfg`; each gets the full expansion budget.
pub fn solve_with_cfg(
    grid: &Grid,
    start: Configuration,
    cfg: SearchCfg,
) -> Result<Solution, SearchError> {
    let [v_goal, h_goal] = goals(grid);
    let vertical = Candidate {
        goal: v_goal,
        report: search_report(grid, start, v_goal, cfg)?,
    };
    let horizontal = Candidate {
        goal: h_goal,
        report: search_report(grid, start, h_goal, cfg)?,
    };
    let solution = Solution {
        vertical,
        horizontal,
    };
    tracing::debug!(
        start = %start,
        chosen = ?solution.chosen(),
        moves = solution.move_count(),
        "solved"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_hug_bottom_right() {
        let g = Grid::open(5, 9).unwrap();
        assert_eq!(
            goals(&g),
            [
                Configuration::vertical(3, 8),
                Configuration::horizontal(4, 7)
            ]
        );
    }

    #[test]
    fn start_already_at_goal_is_zero_moves() {
        let g = Grid::open(3, 3).unwrap();
        let s = solve(&g, Configuration::horizontal(2, 1)).unwrap();
        assert_eq!(s.move_count(), 0);
        assert_eq!(s.chosen(), Some(Orientation::Horizontal));
        assert_eq!(s.best().unwrap().len(), 1);
        // the vertical goal is still reachable, just longer
        assert_eq!(
            s.vertical.report.path.as_ref().map(Path::move_count),
            Some(3)
        );
    }

    #[test]
    fn center_start_on_three_by_three() {
        let g = Grid::open(3, 3).unwrap();
        let s = solve(&g, Configuration::horizontal(1, 1)).unwrap();
        assert_eq!(s.move_count(), 1);
        assert_eq!(
            s.best().unwrap().to_vec(),
            vec![
                Configuration::horizontal(1, 1),
                Configuration::horizontal(2, 1)
            ]
        );
    }

    #[test]
    fn wall_reports_sentinel() {
        let g = Grid::from_rows(&["......", "......", "######", "......", "......"]).unwrap();
        let s = solve(&g, DEFAULT_START).unwrap();
        assert_eq!(s.chosen(), None);
        assert!(s.best().is_none());
        assert_eq!(s.move_count(), NO_SOLUTION);
    }

    #[test]
    fn vertical_wins_ties() {
        // Both finishes take five moves from the corner.
        let g = Grid::open(3, 5).unwrap();
        let s = solve(&g, DEFAULT_START).unwrap();
        let v = s.vertical.report.path.as_ref().unwrap();
        let h = s.horizontal.report.path.as_ref().unwrap();
        assert_eq!((v.move_count(), h.move_count()), (5, 5));
        assert_eq!(s.chosen(), Some(Orientation::Vertical));
        assert_eq!(s.best().unwrap().goal(), Configuration::vertical(1, 4));
        assert_eq!(s.move_count(), 5);
    }

    #[test]
    fn horizontal_only_when_vertical_unreachable() {
        // Right column blocked except the bottom cell: no vertical finish.
        let g = Grid::from_rows(&["....#", "....#", "....."]).unwrap();
        let s = solve(&g, DEFAULT_START).unwrap();
        assert!(s.vertical.report.path.is_none());
        assert_eq!(s.chosen(), Some(Orientation::Horizontal));
        assert_eq!(s.move_count(), 4);
    }

    #[test]
    fn invalid_start_propagates() {
        let g = Grid::from_rows(&["#..", "...", "..."]).unwrap();
        assert!(matches!(
            solve(&g, DEFAULT_START),
            Err(SearchError::InvalidStart { .. })
        ));
    }
}
