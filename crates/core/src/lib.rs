//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and session state. It has **no
//! dependencies** on terminals, threads, or wall-clock time, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests cover every rule below
//! - **Portable**: The engine crate adds locking and timing on top
//!
//! # Module Structure
//!
//! - [`catalog`]: The seven shape kinds, their colors and four rotation states
//! - [`piece`]: Id-stamped occupancy matrices and live pieces
//! - [`grid`]: Playfield cells, collision detection, merge and row clearing
//! - [`game_state`]: One session: spawn, move, rotate, settle, game over
//! - [`snapshot`]: Read-only copies of the session for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: Random kind (the last catalog kind is never drawn), random
//!   rotation among the first three, random column, top row
//! - **Collision**: A piece collides when it leaves the field or overlaps a
//!   settled cell; piece ids grow monotonically within a game so overlap is
//!   `grid_cell + piece_cell > id`
//! - **Rotation**: Next state in the cycle; if blocked and the piece is taller
//!   than wide, one retry shifted left by `height - width`
//! - **Scoring**: One point per completed row
//! - **Game over**: A spawn that collides immediately; the final score joins the
//!   score history and a fresh game begins
//!
//! # Example
//!
//! ```
//! use termtris_core::GameState;
//! use termtris_types::GameAction;
//!
//! let mut game = GameState::new(10, 20, 12345).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! assert_eq!(game.score(), 0);
//! assert!(game.active().is_some());
//! ```

pub mod catalog;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod snapshot;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use catalog::{rotation_state, ShapeKind};
pub use error::ConfigError;
pub use game_state::{GameState, Phase};
pub use grid::Grid;
pub use piece::{stamp_id, Occupancy, Piece};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
