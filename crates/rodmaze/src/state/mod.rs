//! Rod configurations and the two move families.
//!
//! Purpose
//! - A `Configuration` is the rod's center cell plus its `Orientation`; the rod
//!   covers the center and both neighbours along that axis (its footprint).
//! - Moves are unit-cost: `translate` shifts the center one cell keeping the
//!   orientation, `rotate` flips the orientation in place.
//!
//! Legality
//! - Translation: the target footprint (same orientation) is in bounds and open.
//! - Rotation: the center is not on the grid border and all 8 cells around it
//!   are open. This does not depend on the orientation and does not re-check
//!   the center cell itself.
//!
//! Code cross-refs: `grid::{Grid, Cell, RING_OFFSETS}`, `search::search`.

use std::fmt;

use crate::grid::{Cell, Grid, RING_OFFSETS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit offset along the rod's axis.
    #[inline]
    fn axis(self) -> Cell {
        match self {
            Orientation::Horizontal => Cell::new(0, 1),
            Orientation::Vertical => Cell::new(1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "h"),
            Orientation::Vertical => write!(f, "v"),
        }
    }
}

/// Unit translation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order used by `successors`: column +1, column −1, row +1, row −1.
    pub const EXPANSION_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    #[inline]
    pub fn offset(self) -> Cell {
        match self {
            Direction::Up => Cell::new(-1, 0),
            Direction::Down => Cell::new(1, 0),
            Direction::Left => Cell::new(0, -1),
            Direction::Right => Cell::new(0, 1),
        }
    }
}

/// Search state: where the rod is and which way it lies.
///
/// Equality is center + orientation only; search bookkeeping lives in
/// `search::SearchNode`, never here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub center: Cell,
    pub orientation: Orientation,
}

impl Configuration {
    #[inline]
    pub const fn new(center: Cell, orientation: Orientation) -> Self {
        Self {
            center,
            orientation,
        }
    }

    #[inline]
    pub const fn horizontal(row: i32, col: i32) -> Self {
        Self::new(Cell::new(row, col), Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(row: i32, col: i32) -> Self {
        Self::new(Cell::new(row, col), Orientation::Vertical)
    }

    /// The three cells the rod covers, in axis order.
    #[inline]
    pub fn footprint(&self) -> [Cell; 3] {
        footprint(self.center, self.orientation)
    }

    /// Footprint in bounds and open.
    #[inline]
    pub fn is_valid(&self, grid: &Grid) -> bool {
        is_open_footprint(grid, self.center, self.orientation)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.center, self.orientation)
    }
}

/// What took the rod from one configuration to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Translate(Direction),
    Rotate,
}

#[inline]
fn footprint(center: Cell, orientation: Orientation) -> [Cell; 3] {
    let a = orientation.axis();
    [center - a, center, center + a]
}

/// True iff `center` and its two neighbours along `orientation` are in bounds and open.
pub fn is_open_footprint(grid: &Grid, center: Cell, orientation: Orientation) -> bool {
    footprint(center, orientation)
        .into_iter()
        .all(|c| grid.is_open(c))
}

/// Shift the center by one step, keeping the orientation. `None` if illegal.
pub fn translate(grid: &Grid, config: Configuration, dir: Direction) -> Option<Configuration> {
    let center = config.center + dir.offset();
    if is_open_footprint(grid, center, config.orientation) {
        Some(Configuration::new(center, config.orientation))
    } else {
        None
    }
}

/// Flip the orientation in place. `None` if the 3×3 block around the center
/// leaves the grid or any of the 8 surrounding cells is blocked.
pub fn rotate(grid: &Grid, config: Configuration) -> Option<Configuration> {
    let c = config.center;
    let interior = c.row >= 1
        && c.col >= 1
        && i64::from(c.row) + 1 < i64::from(grid.row_bound())
        && i64::from(c.col) + 1 < i64::from(grid.col_bound());
    if !interior {
        return None;
    }
    if RING_OFFSETS.iter().all(|&d| grid.is_open(c + d)) {
        Some(Configuration::new(c, config.orientation.flipped()))
    } else {
        None
    }
}

/// Legal one-move neighbours of `config`: the rotation first (if legal), then
/// translations in `Direction::EXPANSION_ORDER`.
pub fn successors(
    grid: &Grid,
    config: Configuration,
) -> impl Iterator<Item = (Move, Configuration)> + '_ {
    let rot = rotate(grid, config).map(|c| (Move::Rotate, c));
    let moves = Direction::EXPANSION_ORDER
        .into_iter()
        .filter_map(move |d| translate(grid, config, d).map(|c| (Move::Translate(d), c)));
    rot.into_iter().chain(moves)
}

/// The move that takes `from` to `to`, if they are one legal move apart.
pub fn move_between(grid: &Grid, from: Configuration, to: Configuration) -> Option<Move> {
    successors(grid, from).find(|&(_, c)| c == to).map(|(m, _)| m)
}

#[cfg(test)]
mod tests;
