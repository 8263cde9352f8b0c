//! Reference mazes with known answers from the default start.

use crate::grid::{Grid, GridError};

#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    /// `solve::solve` result from `solve::DEFAULT_START`.
    pub expected_moves: i64,
}

impl Fixture {
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::from_rows(self.rows)
    }
}

pub static FIXTURES: [Fixture; 5] = [
    // Open field with two short wall stubs; only the vertical finish is reachable.
    Fixture {
        name: "stubs",
        rows: &[
            ".........",
            "#...#....",
            "....#....",
            ".#.....#.",
            ".#.....#.",
        ],
        expected_moves: 11,
    },
    // Like `stubs`, with one extra wall that seals both finishes.
    Fixture {
        name: "sealed",
        rows: &[
            ".........",
            "#...#..#.",
            "....#....",
            ".#.....#.",
            ".#.....#.",
        ],
        expected_moves: -1,
    },
    Fixture {
        name: "tiny",
        rows: &[
            "...",
            "...",
            "...",
        ],
        expected_moves: 2,
    },
    // 10×10 with scattered posts.
    Fixture {
        name: "posts",
        rows: &[
            "..........",
            ".#....#...",
            ".#........",
            "..........",
            "..........",
            ".#........",
            ".#...#....",
            "......#...",
            "..........",
            "..........",
        ],
        expected_moves: 16,
    },
    // 11×11 winding maze; the long way round.
    Fixture {
        name: "spiral",
        rows: &[
            "...#.......",
            "...#...#...",
            "...#...#...",
            ".###.#####.",
            ".#.......#.",
            ".#...#...#.",
            ".#...#...#.",
            ".#######.#.",
            ".....#...#.",
            ".....#...#.",
            ".........#.",
        ],
        expected_moves: 59,
    },
];

pub fn by_name(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|f| f.name == name)
}
