//! Session engine - shared, timed access to one game.
//!
//! [`core`] holds the rules and is single-threaded. This crate puts a
//! [`GameState`](core::GameState) behind a mutex so a gravity ticker and any
//! number of input or render threads can drive it, and it owns the game-over
//! countdown that starts the next game.

pub mod config;
pub mod engine;

pub use termtris_core as core;
pub use termtris_types as types;

pub use config::EngineConfig;
pub use engine::{Engine, EngineSnapshot};
