//! Grid tests - collision, merge and row clearing through the public API

use termtris::core::catalog::rotation_state;
use termtris::core::{ConfigError, Grid, Occupancy, Piece};
use termtris::types::{PieceKind, Rotation, MIN_HEIGHT, MIN_WIDTH};

fn flat_i(id: u32) -> Occupancy {
    Occupancy::stamped(rotation_state(PieceKind::I, Rotation::R0), id)
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(10, 20).unwrap();
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert!(grid.is_empty());
    assert_eq!(grid.rows().count(), 20);
    assert!(grid.cells().iter().all(|&c| c == 0));
}

#[test]
fn test_grid_minimum_size() {
    assert!(Grid::new(MIN_WIDTH, MIN_HEIGHT).is_ok());
    assert!(matches!(
        Grid::new(MIN_WIDTH - 1, 20),
        Err(ConfigError::WidthTooSmall { width: 5, .. })
    ));
    assert!(matches!(
        Grid::new(10, MIN_HEIGHT - 1),
        Err(ConfigError::HeightTooSmall { height: 9, .. })
    ));
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(6, 10).unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(6, 0), None);
    assert_eq!(grid.get(0, 10), None);
    assert_eq!(grid.get(5, 9), Some(0));
}

#[test]
fn test_collision_walls_and_floor() {
    let grid = Grid::new(6, 10).unwrap();
    let bar = flat_i(1);

    assert!(!grid.collides(0, 0, &bar, 1));
    assert!(!grid.collides(2, 9, &bar, 1));
    assert!(grid.collides(-1, 0, &bar, 1));
    assert!(grid.collides(3, 0, &bar, 1));
    assert!(grid.collides(0, 10, &bar, 1));
}

#[test]
fn test_collision_with_settled_cells() {
    let mut grid = Grid::new(6, 10).unwrap();
    grid.merge_piece(&Piece::new(1, PieceKind::I, Rotation::R0).at(0, 9));

    let bar = flat_i(2);
    assert!(grid.collides(0, 9, &bar, 2));
    assert!(grid.collides(2, 9, &bar, 2));
    assert!(!grid.collides(0, 8, &bar, 2));
}

#[test]
fn test_merge_stamps_piece_id() {
    let mut grid = Grid::new(6, 10).unwrap();
    grid.merge_piece(&Piece::new(4, PieceKind::O, Rotation::R0).at(2, 8));

    assert_eq!(grid.row(8), Some(&[0, 0, 4, 4, 0, 0][..]));
    assert_eq!(grid.row(9), Some(&[0, 0, 4, 4, 0, 0][..]));
    assert!(!grid.is_empty());
}

#[test]
fn test_clear_completed_rows_shifts_down() {
    let mut rows = vec![[0u32; 6]; 10];
    rows[7] = [0, 0, 5, 0, 0, 0];
    rows[8] = [1, 1, 2, 2, 3, 3];
    rows[9] = [4, 4, 4, 4, 0, 4];
    let mut grid = Grid::from_rows(&rows).unwrap();

    assert!(grid.is_row_complete(8));
    assert_eq!(grid.clear_completed_rows(), 1);

    assert_eq!(grid.row(0), Some(&[0; 6][..]));
    assert_eq!(grid.row(8), Some(&[0, 0, 5, 0, 0, 0][..]));
    assert_eq!(grid.row(9), Some(&[4, 4, 4, 4, 0, 4][..]));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut rows = vec![[0u32; 6]; 10];
    rows[5] = [1; 6];
    rows[6] = [0, 2, 0, 0, 0, 0];
    rows[7] = [3; 6];
    rows[8] = [6, 0, 0, 0, 0, 6];
    rows[9] = [4; 6];
    let mut grid = Grid::from_rows(&rows).unwrap();

    assert_eq!(grid.clear_completed_rows(), 3);
    assert_eq!(grid.row(9), Some(&[6, 0, 0, 0, 0, 6][..]));
    assert_eq!(grid.row(8), Some(&[0, 2, 0, 0, 0, 0][..]));
    for y in 0..8 {
        assert_eq!(grid.row(y), Some(&[0; 6][..]), "row {y}");
    }
    assert_eq!(grid.height(), 10);
}

#[test]
fn test_clear_resets_everything() {
    let mut grid = Grid::from_rows(&[[1u32; 6]; 10]).unwrap();
    grid.clear();
    assert!(grid.is_empty());
}
