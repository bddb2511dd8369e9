use std::collections::HashMap;

use crate::piece::{Occupancy, Piece};
use crate::types::{Cell, PieceId, PieceKind, Rgb, Rotation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub id: PieceId,
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub occupancy: Occupancy,
}

impl ActiveSnapshot {
    /// Absolute (x, y) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupancy.cells_at(self.x, self.y)
    }
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            id: value.id(),
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
            occupancy: value.occupancy().clone(),
        }
    }
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Settled cells, row-major
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Display color per piece id
    pub colors: HashMap<PieceId, Rgb>,
    pub score: u32,
    pub game_over: bool,
    /// Bumped on every applied transition
    pub revision: u64,
}

impl GameSnapshot {
    /// Settled cell at (x, y); 0 outside the field
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.cells[y * self.width + x]
    }

    pub fn color_of(&self, id: PieceId) -> Option<Rgb> {
        self.colors.get(&id).copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}
