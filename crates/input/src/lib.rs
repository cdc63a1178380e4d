//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. Placement is
//! discrete: the cursor moves one cell per key press, so no auto-repeat
//! handling is needed beyond what the terminal delivers.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
