//! Data types for the best-first search: arena nodes, paths, config, errors.
//!
//! Kept small and explicit so `astar` and `bfs` read as plain control flow.

use std::fmt;
use std::ops::Deref;

use crate::grid::Grid;
use crate::state::{move_between, Configuration, Move};

/// Stable index of a node in the search arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Arena node. Deliberately not `PartialEq`: identity in the search is the
/// `Configuration`, never the cost fields.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub config: Configuration,
    pub g: u32,
    pub h: u32,
    pub f: u32,
    pub parent: Option<NodeId>,
}

/// Ordered configurations from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<Configuration>);

impl Path {
    /// `steps` must be non-empty.
    pub(crate) fn new(steps: Vec<Configuration>) -> Self {
        debug_assert!(!steps.is_empty());
        Self(steps)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Configuration {
        self.0[0]
    }

    #[inline]
    pub fn goal(&self) -> Configuration {
        self.0[self.0.len() - 1]
    }

    /// Moves between consecutive configurations. `None` if some pair is not
    /// one legal move apart on `grid`.
    pub fn moves(&self, grid: &Grid) -> Option<Vec<Move>> {
        self.0
            .windows(2)
            .map(|w| move_between(grid, w[0], w[1]))
            .collect()
    }

    pub fn into_vec(self) -> Vec<Configuration> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Configuration];

    fn deref(&self) -> &[Configuration] {
        &self.0
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    /// Stop with `SearchError::BudgetExhausted` after this many expansions.
    /// `None` searches until the frontier is empty.
    pub max_expansions: Option<usize>,
}

/// Outcome of one search with its work counters.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// `None` when the goal is unreachable.
    pub path: Option<Path>,
    /// Nodes taken off the frontier (the goal node included).
    pub expanded: usize,
    /// Legal successors produced, before the visited/frontier checks.
    pub generated: usize,
}

/// Errors surfaced by the search engines. Unreachability is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start footprint leaves the grid or covers a blocked cell.
    InvalidStart { start: Configuration },
    /// `SearchCfg::max_expansions` was reached before the search finished.
    BudgetExhausted { expanded: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidStart { start } => write!(
                f,
                "invalid start configuration ({start}): footprint must be in bounds and open"
            ),
            SearchError::BudgetExhausted { expanded } => {
                write!(f, "expansion budget exhausted after {expanded} nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {}
