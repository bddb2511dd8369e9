//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws an engine
//! snapshot into a [`FrameBuffer`] and [`TerminalRenderer`] flushes that
//! buffer to the terminal, writing only what changed since the last frame.
//! Drawing is pure and unit-tested; only the renderer touches stdout.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_engine as engine;
pub use termtris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
