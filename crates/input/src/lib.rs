//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and decides
//! which keys end the program. It holds no timing state: every key press or
//! auto-repeat is one action.

pub mod map;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
