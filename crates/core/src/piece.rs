//! Piece module - id-stamped occupancy matrices and live pieces
//!
//! A piece's matrix holds `0` for empty cells and the piece's own id for
//! occupied ones. Grid cells hold earlier ids, which is what lets collision
//! detection tell "my cells" from "settled cells" with a single comparison.

use arrayvec::ArrayVec;

use crate::catalog::{rotation_state, Mask};
use crate::types::{Cell, PieceId, PieceKind, Rotation};

/// Largest bounding box of any catalog shape (4x4)
pub const MAX_CELLS: usize = 16;

/// Row-major occupancy matrix of at most 4x4 cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occupancy {
    width: usize,
    cells: ArrayVec<Cell, MAX_CELLS>,
}

impl Occupancy {
    /// Build a matrix from rows of cell values.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, ragged, or larger than 16 cells.
    pub fn from_rows<T: Copy + Into<Cell>>(rows: &[&[T]]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty(), "empty occupancy");
        let width = rows[0].len();
        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "ragged occupancy rows");
            for &c in row.iter() {
                cells.push(c.into());
            }
        }
        Self { width, cells }
    }

    /// Catalog mask stamped with `id`
    pub fn stamped(mask: Mask, id: PieceId) -> Self {
        let mut occupancy = Self::from_rows(mask);
        stamp_id(&mut occupancy, id);
        occupancy
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// (col, row) offsets of occupied cells
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Field coordinates of occupied cells with the top-left corner at (x, y)
    pub fn cells_at(&self, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.filled()
            .map(move |(col, row)| (x + col as i32, y + row as i32))
    }
}

/// Replace every positive cell with `id`
pub fn stamp_id(matrix: &mut Occupancy, id: PieceId) {
    for cell in matrix.cells.iter_mut() {
        if *cell > 0 {
            *cell = id;
        }
    }
}

/// A falling or settled piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    rotation: Rotation,
    /// Column of the bounding box's left edge
    pub x: i32,
    /// Row of the bounding box's top edge
    pub y: i32,
    occupancy: Occupancy,
}

impl Piece {
    /// Create a piece at (0, 0) in the given rotation
    pub fn new(id: PieceId, kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            id,
            kind,
            rotation,
            x: 0,
            y: 0,
            occupancy: Occupancy::stamped(rotation_state(kind, rotation), id),
        }
    }

    /// Same piece placed at (x, y)
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Bounding-box rows of the current rotation
    pub fn height(&self) -> usize {
        self.occupancy.height()
    }

    /// Bounding-box columns of the current rotation
    pub fn width(&self) -> usize {
        self.occupancy.width()
    }

    /// The next rotation state and its id-stamped matrix
    pub fn next_rotation(&self) -> (Rotation, Occupancy) {
        let rotation = self.rotation.next();
        let occupancy = Occupancy::stamped(rotation_state(self.kind, rotation), self.id);
        (rotation, occupancy)
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation, occupancy: Occupancy) {
        self.rotation = rotation;
        self.occupancy = occupancy;
    }

    /// Absolute (x, y) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupancy.cells_at(self.x, self.y)
    }
}
