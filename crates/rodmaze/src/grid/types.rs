//! Cell coordinates and the immutable open/blocked grid.
//!
//! - `Cell`: signed (row, col) pair so that neighbours of border cells can be
//!   formed and then rejected by `Grid::status`.
//! - `Grid`: rectangular, row-major map of `CellStatus`. Never mutated once built.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Grid coordinate. Row grows downward, column grows rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn dist2(self, other: Cell) -> u32 {
        let d = self - other;
        (d.row * d.row + d.col * d.col) as u32
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Cell) -> Cell {
        Cell::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 cells around the origin (3×3 block minus the center).
pub const RING_OFFSETS: [Cell; 8] = [
    Cell { row: 0, col: -1 },
    Cell { row: 0, col: 1 },
    Cell { row: -1, col: 0 },
    Cell { row: 1, col: 0 },
    Cell { row: -1, col: -1 },
    Cell { row: -1, col: 1 },
    Cell { row: 1, col: -1 },
    Cell { row: 1, col: 1 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Open,
    Blocked,
}

impl CellStatus {
    pub const OPEN_CHAR: char = '.';
    pub const BLOCKED_CHAR: char = '#';

    #[inline]
    pub fn is_open(self) -> bool {
        self == CellStatus::Open
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::OPEN_CHAR => Some(CellStatus::Open),
            Self::BLOCKED_CHAR => Some(CellStatus::Blocked),
            _ => None,
        }
    }
}

/// Errors surfaced while building a grid from row literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no cells.
    Empty,
    /// Row `row` has `found` cells where `expected` were required.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Character other than `.` or `#`.
    UnknownCell { row: usize, col: usize, ch: char },
    /// A side longer than `Grid::MAX_SIDE`.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (grid must be rectangular)"
            ),
            GridError::UnknownCell { row, col, ch } => write!(
                f,
                "unknown cell {ch:?} at ({row}, {col}); use '.' for open and '#' for blocked"
            ),
            GridError::TooLarge { rows, cols } => write!(
                f,
                "grid {rows}x{cols} exceeds the maximum side of {}",
                Grid::MAX_SIDE
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular map from `Cell` to `CellStatus`, stored row-major.
///
/// Both sides are at most `MAX_SIDE`, so every in-bounds cell is a `Cell`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellStatus>,
}

impl Grid {
    /// Longest side a grid may have; coordinates are `i32`.
    pub const MAX_SIDE: usize = i32::MAX as usize;

    fn check_size(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if rows > Self::MAX_SIDE || cols > Self::MAX_SIDE {
            return Err(GridError::TooLarge { rows, cols });
        }
        Ok(())
    }

    /// Grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::check_size(rows, cols)?;
        Ok(Self::filled(rows, cols, CellStatus::Open))
    }

    /// Callers guarantee `1 <= rows, cols <= MAX_SIDE`.
    pub(crate) fn filled(rows: usize, cols: usize, status: CellStatus) -> Self {
        Self {
            rows,
            cols,
            cells: vec![status; rows * cols],
        }
    }

    /// Build from row literals such as `"..#."`. Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut cols = 0;
        for (r, line) in rows.iter().enumerate() {
            let mut found = 0;
            for (c, ch) in line
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .enumerate()
            {
                let status = CellStatus::from_char(ch).ok_or(GridError::UnknownCell {
                    row: r,
                    col: c,
                    ch,
                })?;
                cells.push(status);
                found += 1;
            }
            if r == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found,
                });
            }
        }
        Self::check_size(rows.len(), cols)?;
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows, as a signed coordinate bound.
    #[inline]
    pub fn row_bound(&self) -> i32 {
        i32::try_from(self.rows).unwrap_or(i32::MAX)
    }

    /// Number of columns, as a signed coordinate bound.
    #[inline]
    pub fn col_bound(&self) -> i32 {
        i32::try_from(self.cols).unwrap_or(i32::MAX)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Status of `cell`, or `None` when it lies outside the grid.
    #[inline]
    pub fn status(&self, cell: Cell) -> Option<CellStatus> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.cells[cell.row as usize * self.cols + cell.col as usize])
    }

    /// In bounds and open.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.status(cell).is_some_and(CellStatus::is_open)
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_open()).count()
    }

    pub(crate) fn set(&mut self, cell: Cell, status: CellStatus) {
        if self.contains(cell) {
            self.cells[cell.row as usize * self.cols + cell.col as usize] = status;
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// One row per non-empty line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for s in row {
                let ch = match s {
                    CellStatus::Open => CellStatus::OPEN_CHAR,
                    CellStatus::Blocked => CellStatus::BLOCKED_CHAR,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
