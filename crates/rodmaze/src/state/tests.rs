use super::*;
use crate::grid::Grid;

fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn footprint_follows_orientation() {
    let h = Configuration::horizontal(2, 3);
    assert_eq!(
        h.footprint(),
        [Cell::new(2, 2), Cell::new(2, 3), Cell::new(2, 4)]
    );
    let v = Configuration::vertical(2, 3);
    assert_eq!(
        v.footprint(),
        [Cell::new(1, 3), Cell::new(2, 3), Cell::new(3, 3)]
    );
}

#[test]
fn equality_is_center_and_orientation() {
    assert_eq!(
        Configuration::horizontal(1, 1),
        Configuration::new(Cell::new(1, 1), Orientation::Horizontal)
    );
    assert_ne!(
        Configuration::horizontal(1, 1),
        Configuration::vertical(1, 1)
    );
    assert_ne!(
        Configuration::horizontal(1, 1),
        Configuration::horizontal(1, 2)
    );
}

#[test]
fn open_footprint_rejects_walls_and_borders() {
    let g = grid(&["....", ".#..", "...."]);
    assert!(is_open_footprint(&g, Cell::new(0, 1), Orientation::Horizontal));
    // left neighbour off-grid
    assert!(!is_open_footprint(&g, Cell::new(0, 0), Orientation::Horizontal));
    // wall in the middle
    assert!(!is_open_footprint(&g, Cell::new(1, 1), Orientation::Vertical));
    // wall as a flank
    assert!(!is_open_footprint(&g, Cell::new(1, 2), Orientation::Horizontal));
    assert!(is_open_footprint(&g, Cell::new(1, 3), Orientation::Vertical));
    assert!(!is_open_footprint(&g, Cell::new(0, 3), Orientation::Vertical));
}

#[test]
fn translate_checks_target_footprint_with_same_orientation() {
    let g = grid(&[".....", "....#", "....."]);
    let start = Configuration::horizontal(0, 2);
    assert_eq!(
        translate(&g, start, Direction::Left),
        Some(Configuration::horizontal(0, 1))
    );
    // right flank would leave the grid
    assert_eq!(
        translate(&g, start, Direction::Right),
        Some(Configuration::horizontal(0, 3))
    );
    assert_eq!(
        translate(&g, Configuration::horizontal(0, 3), Direction::Right),
        None
    );
    // (1, 4) is blocked
    assert_eq!(
        translate(&g, Configuration::horizontal(0, 3), Direction::Down),
        None
    );
    assert_eq!(translate(&g, start, Direction::Up), None);
    assert_eq!(
        translate(&g, start, Direction::Down),
        Some(Configuration::horizontal(1, 2))
    );
}

#[test]
fn rotate_needs_full_ring_clearance() {
    let open = grid(&["...", "...", "..."]);
    let c = Configuration::horizontal(1, 1);
    assert_eq!(rotate(&open, c), Some(Configuration::vertical(1, 1)));
    assert_eq!(
        rotate(&open, Configuration::vertical(1, 1)),
        Some(Configuration::horizontal(1, 1))
    );
    // a diagonal cell is outside both footprints but still blocks the pivot
    let corner = grid(&["..#", "...", "..."]);
    assert_eq!(rotate(&corner, c), None);
}

#[test]
fn rotate_rejects_border_centers() {
    let g = Grid::open(4, 5).unwrap();
    assert_eq!(rotate(&g, Configuration::horizontal(0, 2)), None);
    assert_eq!(rotate(&g, Configuration::vertical(2, 0)), None);
    assert_eq!(rotate(&g, Configuration::vertical(3, 2)), None);
    assert_eq!(rotate(&g, Configuration::horizontal(1, 4)), None);
    assert!(rotate(&g, Configuration::horizontal(2, 3)).is_some());
}

#[test]
fn rotate_does_not_look_at_center_cell() {
    // Never reachable by a valid configuration, but pins the rule.
    let g = grid(&["...", ".#.", "..."]);
    assert_eq!(
        rotate(&g, Configuration::horizontal(1, 1)),
        Some(Configuration::vertical(1, 1))
    );
}

#[test]
fn successors_are_rotation_then_right_left_down_up() {
    let g = Grid::open(5, 5).unwrap();
    let c = Configuration::horizontal(2, 2);
    let got: Vec<Move> = successors(&g, c).map(|(m, _)| m).collect();
    assert_eq!(
        got,
        vec![
            Move::Rotate,
            Move::Translate(Direction::Right),
            Move::Translate(Direction::Left),
            Move::Translate(Direction::Down),
            Move::Translate(Direction::Up),
        ]
    );
    // Against the top-left corner only right and down remain.
    let edge = Configuration::horizontal(0, 1);
    let got: Vec<Configuration> = successors(&g, edge).map(|(_, c)| c).collect();
    assert_eq!(
        got,
        vec![Configuration::horizontal(0, 2), Configuration::horizontal(1, 1)]
    );
}

#[test]
fn move_between_identifies_single_moves() {
    let g = Grid::open(3, 4).unwrap();
    let a = Configuration::horizontal(1, 1);
    assert_eq!(
        move_between(&g, a, Configuration::vertical(1, 1)),
        Some(Move::Rotate)
    );
    assert_eq!(
        move_between(&g, a, Configuration::horizontal(1, 2)),
        Some(Move::Translate(Direction::Right))
    );
    assert_eq!(move_between(&g, a, Configuration::horizontal(1, 3)), None);
    assert_eq!(move_between(&g, a, a), None);
}
