//! Terminal rendering for the block puzzle.
//!
//! Renders into a plain framebuffer rather than ratatui widgets, then flushes
//! only changed cells to the terminal.
//!
//! - `game_view` is pure: snapshot + preview + theme in, framebuffer out
//! - `renderer` owns the terminal (raw mode, alternate screen, diffing)
//! - `theme` holds glyph and gradient tables, loadable from JSON

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, HINT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{ColorTable, Gradient, ThemeConfig};
