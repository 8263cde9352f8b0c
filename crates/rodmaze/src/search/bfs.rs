//! Exhaustive breadth-first search over the same move graph.
//!
//! Exact shortest move count; used as a reference for the heuristic search.

use std::collections::{HashMap, VecDeque};

use crate::grid::Grid;
use crate::state::{successors, Configuration};

use super::types::{Path, SearchError};

/// Shortest path from `start` to `goal`, or `Ok(None)` if unreachable.
pub fn bfs_path(
    grid: &Grid,
    start: Configuration,
    goal: Configuration,
) -> Result<Option<Path>, SearchError> {
    if !start.is_valid(grid) {
        return Err(SearchError::InvalidStart { start });
    }
    let mut parent: HashMap<Configuration, Option<Configuration>> = HashMap::new();
    parent.insert(start, None);
    let mut queue = VecDeque::from([start]);
    while let Some(cur) = queue.pop_front() {
        if cur == goal {
            let mut steps = vec![cur];
            let mut at = cur;
            while let Some(Some(prev)) = parent.get(&at) {
                steps.push(*prev);
                at = *prev;
            }
            steps.reverse();
            return Ok(Some(Path::new(steps)));
        }
        for (_, next) in successors(grid, cur) {
            if !parent.contains_key(&next) {
                parent.insert(next, Some(cur));
                queue.push_back(next);
            }
        }
    }
    Ok(None)
}
