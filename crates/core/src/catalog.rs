//! Shape catalog - the seven piece kinds and their rotation states
//!
//! Every kind carries four hand-tabulated rotation matrices. They are looked
//! up, never computed, so irregular pieces (the I bar, S/Z) keep exact
//! bounding boxes in every orientation.

use crate::types::{PieceKind, Rgb, Rotation};

/// A rotation state: rows of 0/1 cells, all rows the same length.
pub type Mask = &'static [&'static [u8]];

/// Immutable template for one piece kind
#[derive(Debug)]
pub struct ShapeKind {
    pub kind: PieceKind,
    pub color: Rgb,
    pub rotations: [Mask; 4],
}

static CATALOG: [ShapeKind; PieceKind::COUNT] = [
    ShapeKind {
        kind: PieceKind::T,
        color: Rgb::from_hex(0xFFFF00),
        rotations: [
            &[&[0, 1, 0], &[1, 1, 1]],
            &[&[1, 0], &[1, 1], &[1, 0]],
            &[&[1, 1, 1], &[0, 1, 0]],
            &[&[0, 1], &[1, 1], &[0, 1]],
        ],
    },
    ShapeKind {
        kind: PieceKind::O,
        color: Rgb::from_hex(0x00FFFF),
        rotations: [
            &[&[1, 1], &[1, 1]],
            &[&[1, 1], &[1, 1]],
            &[&[1, 1], &[1, 1]],
            &[&[1, 1], &[1, 1]],
        ],
    },
    ShapeKind {
        kind: PieceKind::S,
        color: Rgb::from_hex(0xBF40BF),
        rotations: [
            &[&[0, 1, 1], &[1, 1, 0]],
            &[&[1, 0], &[1, 1], &[0, 1]],
            &[&[0, 1, 1], &[1, 1, 0]],
            &[&[1, 0], &[1, 1], &[0, 1]],
        ],
    },
    ShapeKind {
        kind: PieceKind::Z,
        color: Rgb::from_hex(0x00FF00),
        rotations: [
            &[&[1, 1, 0], &[0, 1, 1]],
            &[&[0, 1], &[1, 1], &[1, 0]],
            &[&[1, 1, 0], &[0, 1, 1]],
            &[&[0, 1], &[1, 1], &[1, 0]],
        ],
    },
    ShapeKind {
        kind: PieceKind::I,
        color: Rgb::from_hex(0xFF0000),
        rotations: [
            &[&[1, 1, 1, 1]],
            &[&[1], &[1], &[1], &[1]],
            &[&[1, 1, 1, 1]],
            &[&[1], &[1], &[1], &[1]],
        ],
    },
    ShapeKind {
        kind: PieceKind::J,
        color: Rgb::from_hex(0x0096FF),
        rotations: [
            &[&[1, 0, 0], &[1, 1, 1]],
            &[&[1, 1], &[1, 0], &[1, 0]],
            &[&[1, 1, 1], &[0, 0, 1]],
            &[&[0, 1], &[0, 1], &[1, 1]],
        ],
    },
    ShapeKind {
        kind: PieceKind::L,
        color: Rgb::from_hex(0xFF7FF0),
        rotations: [
            &[&[0, 0, 1], &[1, 1, 1]],
            &[&[1, 0], &[1, 0], &[1, 1]],
            &[&[1, 1, 1], &[1, 0, 0]],
            &[&[1, 1], &[0, 1], &[0, 1]],
        ],
    },
];

/// The full catalog, in kind order
pub fn catalog() -> &'static [ShapeKind; PieceKind::COUNT] {
    &CATALOG
}

/// Template for a piece kind
pub fn shape(kind: PieceKind) -> &'static ShapeKind {
    &CATALOG[kind.index()]
}

/// Get the 0/1 occupancy matrix for a kind in a rotation state
pub fn rotation_state(kind: PieceKind, rotation: Rotation) -> Mask {
    shape(kind).rotations[rotation.index()]
}

/// Display color of a kind
pub fn color(kind: PieceKind) -> Rgb {
    shape(kind).color
}
