//! Sliding-rod maze solver.
//!
//! A rigid 3-cell rod, horizontal or vertical, is translated and rotated
//! through a grid of open/blocked cells from a start configuration to a goal
//! configuration in as few moves as possible.
//!
//! Layout
//! - `grid`: immutable cell map, row-literal parsing, seeded random grids.
//! - `state`: `Configuration` (center + orientation) and the translate/rotate rules.
//! - `search`: best-first search over configurations, plus the BFS reference.
//! - `solve`: runs the search toward both bottom-right finishes and keeps the shorter.
//! - `fixtures`: reference mazes with known answers.

pub mod fixtures;
pub mod grid;
pub mod search;
pub mod solve;
pub mod state;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::rand::{draw_grid, RandomGridCfg, ReplayToken};
    pub use crate::grid::{Cell, CellStatus, Grid, GridError};
    pub use crate::search::{
        bfs_path, search, search_report, search_with_cfg, Path, SearchCfg, SearchError,
        SearchReport,
    };
    pub use crate::solve::{goals, solve, solve_with_cfg, Solution, DEFAULT_START, NO_SOLUTION};
    pub use crate::state::{Configuration, Direction, Move, Orientation};
}
