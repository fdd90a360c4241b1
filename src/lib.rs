//! Cyber Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one roof (`cyber_tetris::{core, input,
//! term, types}`) and holds the binary's argument parsing.

pub mod cli;

pub use cyber_tetris_core as core;
pub use cyber_tetris_input as input;
pub use cyber_tetris_term as term;
pub use cyber_tetris_types as types;
