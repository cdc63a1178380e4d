//! Player-facing control layer.
//!
//! Turns discrete [`types::GameAction`]s into core operations: it owns the
//! selected piece slot and the cursor anchor, and forwards placement to
//! [`core::GameState::place`]. Pixel or key translation stays outside.

pub mod place;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use place::{ControlError, ControlOutcome, Controller, Preview};
