//! Best-first search for the rod: from a start configuration to a goal configuration.
//!
//! Purpose
//! - `search` runs an A*-style expansion over `state::successors` with a
//!   squared-Euclidean heuristic and returns the configuration path, or `None`
//!   when the goal cannot be reached.
//! - `bfs_path` enumerates the same graph breadth-first; it is exact and serves
//!   as the reference the heuristic search is compared against.
//!
//! Notes
//! - Nodes live in an arena (`Vec<SearchNode>`) and point to their parent by
//!   `NodeId`, so path reconstruction is a walk over indices.
//! - A blocked goal *cell* short-circuits to `None` before any expansion; a goal
//!   whose cell is open but whose footprint is not simply exhausts the frontier.
//!
//! Code cross-refs: `state::{successors, Configuration}`, `solve::solve`.

mod astar;
mod bfs;
mod types;

pub use astar::{search, search_report, search_with_cfg};
pub use bfs::bfs_path;
pub use types::{NodeId, Path, SearchCfg, SearchError, SearchNode, SearchReport};
