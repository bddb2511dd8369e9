//! Terminal falling-block puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path.

pub use termtris_core as core;
pub use termtris_engine as engine;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;
