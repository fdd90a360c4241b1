//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Timing and
//! key repeat are left to the terminal: every press is one command, and
//! repeat events are dropped so a held key does not flood the session.

pub mod map;

pub use cyber_tetris_types as types;

pub use map::{handle_key_event, should_quit};
