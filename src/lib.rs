//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blocks::{core,engine,input,term,types}`
//! and adds the binary-side pieces: environment config, high-score store and
//! the JSONL event log.

pub mod config;
pub mod event_log;
pub mod store;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::GameConfig;
pub use event_log::{EventLog, GameEvent};
pub use store::HighScoreStore;
