//! Random grids with reproducible replay tokens.
//!
//! Model
//! - Every cell is blocked independently with probability `blocked_ratio`.
//! - With `clear_corners`, the default start footprint (top-left, horizontal)
//!   and both bottom-right goal footprints are forced open so that draws are
//!   interesting to solve rather than trivially rejected.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Cell, CellStatus, Grid};

/// Random grid configuration. Dimensions are clamped to at least 3×3 and at
/// most `Grid::MAX_SIDE`.
#[derive(Clone, Copy, Debug)]
pub struct RandomGridCfg {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell is blocked. Clamped to [0, 1]; NaN means 0.
    pub blocked_ratio: f64,
    pub clear_corners: bool,
}

impl Default for RandomGridCfg {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            blocked_ratio: 0.2,
            clear_corners: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// One 64-bit word that differs for every `(seed, index)` pair.
    fn seed_word(self) -> u64 {
        finalize(self.seed ^ finalize(self.index.wrapping_add(GOLDEN_GAMMA)))
    }

    fn to_std_rng(self) -> StdRng {
        StdRng::seed_from_u64(self.seed_word())
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output finalizer (Stafford variant 13).
#[inline]
fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Blocking probability actually used by `draw_grid`: clamped to [0, 1],
/// with NaN treated as 0 (no blocked cells).
pub fn effective_ratio(blocked_ratio: f64) -> f64 {
    if blocked_ratio.is_nan() {
        0.0
    } else {
        blocked_ratio.clamp(0.0, 1.0)
    }
}

/// Draw a random grid.
pub fn draw_grid(cfg: RandomGridCfg, tok: ReplayToken) -> Grid {
    let rows = cfg.rows.clamp(3, Grid::MAX_SIDE);
    let cols = cfg.cols.clamp(3, Grid::MAX_SIDE);
    let p = effective_ratio(cfg.blocked_ratio);
    let mut rng = tok.to_std_rng();
    let mut grid = Grid::filled(rows, cols, CellStatus::Open);
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            if rng.gen_bool(p) {
                grid.set(Cell::new(r, c), CellStatus::Blocked);
            }
        }
    }
    if cfg.clear_corners {
        for cell in corner_cells(rows as i32, cols as i32) {
            grid.set(cell, CellStatus::Open);
        }
    }
    grid
}

fn corner_cells(rows: i32, cols: i32) -> [Cell; 9] {
    [
        // start: (0, 1) horizontal
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        // vertical goal: (rows-2, cols-1)
        Cell::new(rows - 3, cols - 1),
        Cell::new(rows - 2, cols - 1),
        Cell::new(rows - 1, cols - 1),
        // horizontal goal: (rows-1, cols-2)
        Cell::new(rows - 1, cols - 3),
        Cell::new(rows - 1, cols - 2),
        Cell::new(rows - 1, cols - 1),
    ]
}
