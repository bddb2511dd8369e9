//! Grid module - manages the playfield
//!
//! The grid is a width x height matrix where each cell is `0` (empty) or the id
//! of the settled piece occupying it. Uses a flat vector in row-major order.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::error::{validate_dimensions, ConfigError};
use crate::piece::{Occupancy, Piece};
use crate::types::{Cell, PieceId};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid, rejecting fields below the minimum size
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Create a grid from explicit rows (top row first)
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        validate_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y), `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Check if a row has no empty cell
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c != 0))
    }

    /// Would `matrix`, placed with its top-left corner at (x, y), hit a wall,
    /// the floor, or a settled cell?
    ///
    /// `matrix` must be stamped with `id`, and every settled cell must hold an
    /// id no greater than `id`. Under that invariant `grid + matrix > id` holds
    /// exactly when both cells are occupied.
    pub fn collides(&self, x: i32, y: i32, matrix: &Occupancy, id: PieceId) -> bool {
        if x < 0 {
            return true;
        }
        if x as usize + matrix.width() > self.width {
            return true;
        }
        if y + matrix.height() as i32 > self.height as i32 {
            return true;
        }

        for (row, cells) in matrix.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                // Rows above the field read as empty.
                let settled = self.get(x + col as i32, y + row as i32).unwrap_or(0);
                if settled + cell > id {
                    return true;
                }
            }
        }
        false
    }

    /// Stamp a piece's occupied cells into the grid
    pub fn merge_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if let Some(i) = self.index(x, y) {
                self.cells[i] = piece.id();
            }
        }
    }

    /// Remove every completed row, shift the rest down, and refill the top
    /// with empty rows. Returns the number of rows removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width;
        let mut write_y = self.height;

        // Scan bottom to top, compacting surviving rows towards the floor.
        for read_y in (0..self.height).rev() {
            if self.is_row_complete(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(0);
        write_y
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    fn field(rows: &[[Cell; 6]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn empty_rows(n: usize) -> Vec<[Cell; 6]> {
        vec![[0; 6]; n]
    }

    #[test]
    fn index_calculation() {
        let grid = Grid::new(6, 10).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(5, 0), Some(5));
        assert_eq!(grid.index(0, 1), Some(6));
        assert_eq!(grid.index(5, 9), Some(59));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(6, 0), None);
        assert_eq!(grid.index(0, 10), None);
    }

    #[test]
    fn rejects_small_fields() {
        assert!(matches!(
            Grid::new(5, 20),
            Err(ConfigError::WidthTooSmall { width: 5, .. })
        ));
        assert!(matches!(
            Grid::new(10, 9),
            Err(ConfigError::HeightTooSmall { height: 9, .. })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut rows: Vec<Vec<Cell>> = vec![vec![0; 6]; 10];
        rows[3].pop();
        assert_eq!(
            Grid::from_rows(&rows),
            Err(ConfigError::RaggedRow {
                row: 3,
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn clear_keeps_partial_rows_and_shifts_down() {
        let mut rows = empty_rows(7);
        rows.push([0, 0, 3, 0, 0, 0]);
        rows.push([1, 1, 1, 1, 2, 2]);
        rows.push([1, 1, 0, 2, 2, 2]);
        let mut grid = field(&rows);

        assert_eq!(grid.clear_completed_rows(), 1);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.row(0), Some(&[0; 6][..]));
        assert_eq!(grid.row(8), Some(&[0, 0, 3, 0, 0, 0][..]));
        assert_eq!(grid.row(9), Some(&[1, 1, 0, 2, 2, 2][..]));
    }

    #[test]
    fn clear_multiple_non_adjacent_rows() {
        let mut rows = empty_rows(6);
        rows.push([4, 4, 4, 4, 4, 4]);
        rows.push([0, 5, 0, 0, 0, 0]);
        rows.push([3, 3, 3, 3, 3, 3]);
        rows.push([6, 0, 0, 0, 0, 6]);
        let mut grid = field(&rows);

        assert_eq!(grid.clear_completed_rows(), 2);
        assert_eq!(grid.row(8), Some(&[0, 5, 0, 0, 0, 0][..]));
        assert_eq!(grid.row(9), Some(&[6, 0, 0, 0, 0, 6][..]));
        assert!(grid.rows().take(8).all(|r| r.iter().all(|&c| c == 0)));
    }

    #[test]
    fn clear_nothing_is_identity() {
        let mut rows = empty_rows(9);
        rows.push([1, 1, 1, 0, 1, 1]);
        let mut grid = field(&rows);
        let before = grid.clone();
        assert_eq!(grid.clear_completed_rows(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn merge_writes_only_occupied_cells() {
        let mut grid = Grid::new(6, 10).unwrap();
        let piece = Piece::new(2, PieceKind::T, Rotation::R0).at(1, 8);
        grid.merge_piece(&piece);

        assert_eq!(grid.row(8), Some(&[0, 0, 2, 0, 0, 0][..]));
        assert_eq!(grid.row(9), Some(&[0, 2, 2, 2, 0, 0][..]));
    }

    #[test]
    fn merge_leaves_neighbouring_cells_untouched() {
        let mut rows = empty_rows(9);
        rows.push([1, 0, 0, 0, 0, 0]);
        let mut grid = field(&rows);
        // L rotation 3 leaves its bottom-left cell empty
        let piece = Piece::new(2, PieceKind::L, Rotation::R3).at(0, 7);
        assert!(!grid.collides(0, 7, piece.occupancy(), 2));
        grid.merge_piece(&piece);
        assert_eq!(grid.row(9), Some(&[1, 2, 0, 0, 0, 0][..]));
    }

    #[test]
    fn collides_at_walls_and_floor() {
        let grid = Grid::new(6, 10).unwrap();
        let o = Occupancy::stamped(crate::catalog::rotation_state(PieceKind::O, Rotation::R0), 1);

        assert!(grid.collides(-1, 0, &o, 1));
        assert!(grid.collides(5, 0, &o, 1));
        assert!(grid.collides(0, 9, &o, 1));
        assert!(!grid.collides(4, 8, &o, 1));
        assert!(!grid.collides(0, 0, &o, 1));
    }

    #[test]
    fn collides_only_on_true_overlap() {
        let mut rows = empty_rows(8);
        rows.push([0, 0, 0, 0, 0, 0]);
        rows.push([1, 1, 0, 0, 0, 0]);
        let grid = field(&rows);
        let t = Occupancy::stamped(crate::catalog::rotation_state(PieceKind::T, Rotation::R2), 2);

        // T pointing down: its stem at (x+1, y+1)
        assert!(grid.collides(0, 8, &t, 2));
        assert!(!grid.collides(1, 7, &t, 2));
        assert!(!grid.collides(2, 8, &t, 2));
    }
}
