//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is flushed to a terminal backend, and lets
//! core shapes draw straight into that framebuffer through [`FrameCanvas`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Rasterize shapes at terminal-cell resolution
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per layout unit)

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use shapi_core as core;
pub use shapi_types as types;

pub use canvas::{FrameCanvas, FILL_CHAR, STROKE_CHAR};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{shape_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
