//! Grid of open/blocked cells the rod moves through.
//!
//! Purpose
//! - Hold the immutable cell map every search reads (`Grid`), plus the signed
//!   `Cell` coordinate used by the state model.
//! - Build grids from `.`/`#` row literals (fixtures, tests, CLI) and from
//!   seeded random draws (benches, property tests).
//!
//! Code cross-refs: `state::Configuration::footprint`, `search::search`.

pub mod rand;
mod types;

pub use types::{Cell, CellStatus, Grid, GridError, RING_OFFSETS};
