//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! The playfield size is chosen at session creation. These bounds apply:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WIDTH` | 6 | Narrowest legal field |
//! | `MIN_HEIGHT` | 10 | Shortest legal field |
//! | `DEFAULT_WIDTH` | 10 | Width used when none is configured |
//! | `DEFAULT_HEIGHT` | 20 | Height used when none is configured |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 333 | Gravity interval (one row per tick) |
//! | `DEFAULT_RESTART_DELAY_MS` | 5000 | Game-over countdown before a new game |
//! | `FRAME_MS` | 16 | Render/input polling interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use termtris_types::{PieceKind, Rotation};
//!
//! let kind = PieceKind::from_index(4).unwrap();
//! assert_eq!(kind, PieceKind::I);
//!
//! assert_eq!(Rotation::R3.next(), Rotation::R0);
//! assert_eq!(PieceKind::L.as_str(), "L");
//! ```

/// Minimum field width in cells
pub const MIN_WIDTH: usize = 6;

/// Minimum field height in cells
pub const MIN_HEIGHT: usize = 10;

/// Default field width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default field height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Default gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 333;

/// Default pause between game over and the next game
pub const DEFAULT_RESTART_DELAY_MS: u64 = 5000;

/// Render/input polling interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// A settled or falling piece's identity. `0` is reserved for empty cells.
pub type PieceId = u32;

/// Grid cell value: `0` for empty, otherwise the id of the piece occupying it.
pub type Cell = PieceId;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// The seven tetromino piece kinds, in catalog order
///
/// The discriminant is the catalog index. The spawner never draws the last
/// kind (`L`); it stays in the catalog so its rotations remain addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    S,
    Z,
    I,
    J,
    L,
}

impl PieceKind {
    /// Number of kinds in the catalog
    pub const COUNT: usize = 7;

    /// All kinds, in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// One of the four precomputed rotation states
///
/// Rotation is one-directional: `R0 → R1 → R2 → R3 → R0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// All rotations, in cycle order
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3];

    /// The next state in the cycle
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.next(), Rotation::R1);
    /// assert_eq!(Rotation::R1.next(), Rotation::R2);
    /// assert_eq!(Rotation::R2.next(), Rotation::R3);
    /// assert_eq!(Rotation::R3.next(), Rotation::R0);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Player (or ticker) requests that mutate a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, settling it if blocked
    MoveDown,
    /// Rotate piece to its next rotation state
    Rotate,
}
