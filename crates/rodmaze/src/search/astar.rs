//! Best-first search with a squared-Euclidean heuristic.
//!
//! - Frontier: binary heap keyed by `(f, insertion sequence)`, so equal `f`
//!   pops the node discovered first.
//! - A frontier entry is replaced when a cheaper `g` for the same
//!   configuration shows up; the old heap entry goes stale and is skipped on
//!   pop (`live` tracks the current node per configuration).
//! - `h = Δrow² + Δcol²` to the goal center. It is not admissible for unit
//!   moves, so the result is not guaranteed optimal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::Grid;
use crate::state::{successors, Configuration};

use super::types::{NodeId, Path, SearchCfg, SearchError, SearchNode, SearchReport};

/// Search from `start` to `goal` with no expansion budget.
///
/// Returns `Ok(None)` when the goal is unreachable (or its center cell is
/// blocked) and `Err(InvalidStart)` when `start` is not a valid configuration.
pub fn search(
    grid: &Grid,
    start: Configuration,
    goal: Configuration,
) -> Result<Option<Path>, SearchError> {
    search_with_cfg(grid, start, goal, SearchCfg::default())
}

pub fn search_with_cfg(
    grid: &Grid,
    start: Configuration,
    goal: Configuration,
    cfg: SearchCfg,
) -> Result<Option<Path>, SearchError> {
    Ok(search_report(grid, start, goal, cfg)?.path)
}

/// Like `search_with_cfg`, also returning expansion counters.
pub fn search_report(
    grid: &Grid,
    start: Configuration,
    goal: Configuration,
    cfg: SearchCfg,
) -> Result<SearchReport, SearchError> {
    AStarRunner::new(grid, goal, cfg).run(start)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on f, then on insertion order
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runner carrying the arena, frontier and visited set of one search.
struct AStarRunner<'a> {
    grid: &'a Grid,
    goal: Configuration,
    cfg: SearchCfg,
    nodes: Vec<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    live: HashMap<Configuration, NodeId>,
    closed: HashSet<Configuration>,
    seq: u64,
    expanded: usize,
    generated: usize,
}

impl<'a> AStarRunner<'a> {
    fn new(grid: &'a Grid, goal: Configuration, cfg: SearchCfg) -> Self {
        Self {
            grid,
            goal,
            cfg,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            live: HashMap::new(),
            closed: HashSet::new(),
            seq: 0,
            expanded: 0,
            generated: 0,
        }
    }

    fn run(mut self, start: Configuration) -> Result<SearchReport, SearchError> {
        if !start.is_valid(self.grid) {
            return Err(SearchError::InvalidStart { start });
        }
        // Only the goal's center cell is checked here, not its footprint.
        if !self.grid.is_open(self.goal.center) {
            tracing::debug!(goal = %self.goal, "goal cell blocked");
            return Ok(self.report(None));
        }

        self.push(SearchNode {
            config: start,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        });

        while let Some(entry) = self.open.pop() {
            let config = self.nodes[entry.id.0].config;
            if self.live.get(&config) != Some(&entry.id) {
                continue;
            }
            if let Some(max) = self.cfg.max_expansions {
                if self.expanded >= max {
                    tracing::debug!(expanded = self.expanded, "expansion budget exhausted");
                    return Err(SearchError::BudgetExhausted {
                        expanded: self.expanded,
                    });
                }
            }
            self.live.remove(&config);
            self.closed.insert(config);
            self.expanded += 1;

            if config == self.goal {
                let path = self.reconstruct(entry.id);
                return Ok(self.report(Some(path)));
            }
            self.expand(entry.id);
        }
        Ok(self.report(None))
    }

    fn expand(&mut self, id: NodeId) {
        let (config, g) = {
            let n = &self.nodes[id.0];
            (n.config, n.g)
        };
        tracing::trace!(config = %config, g, "expand");
        let grid = self.grid;
        for (_, child) in successors(grid, config) {
            self.generated += 1;
            if self.closed.contains(&child) {
                continue;
            }
            let g1 = g + 1;
            if let Some(existing) = self.live.get(&child) {
                if self.nodes[existing.0].g <= g1 {
                    continue;
                }
            }
            let h = child.center.dist2(self.goal.center);
            self.push(SearchNode {
                config: child,
                g: g1,
                h,
                f: g1 + h,
                parent: Some(id),
            });
        }
    }

    fn push(&mut self, node: SearchNode) {
        let id = NodeId(self.nodes.len());
        let entry = OpenEntry {
            f: node.f,
            seq: self.seq,
            id,
        };
        self.seq += 1;
        self.live.insert(node.config, id);
        self.nodes.push(node);
        self.open.push(entry);
    }

    fn reconstruct(&self, mut id: NodeId) -> Path {
        let mut steps = vec![self.nodes[id.0].config];
        while let Some(parent) = self.nodes[id.0].parent {
            steps.push(self.nodes[parent.0].config);
            id = parent;
        }
        steps.reverse();
        Path::new(steps)
    }

    fn report(&self, path: Option<Path>) -> SearchReport {
        tracing::debug!(
            expanded = self.expanded,
            generated = self.generated,
            moves = path.as_ref().map(Path::move_count),
            "search finished"
        );
        SearchReport {
            path,
            expanded: self.expanded,
            generated: self.generated,
        }
    }
}
