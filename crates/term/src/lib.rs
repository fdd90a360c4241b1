//! Terminal game renderer.
//!
//! A small rendering layer for playing in a terminal: a [`GameView`] paints a
//! core snapshot into a [`FrameBuffer`] of styled glyphs, and a
//! [`TerminalRenderer`] flushes that buffer through crossterm, diffing against
//! the previous frame. Board cells are two glyphs wide to keep them roughly
//! square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use cyber_tetris_core as core;
pub use cyber_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
