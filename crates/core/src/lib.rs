//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Boards and piece sets can be built directly
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 7x7 grid with placement validity, line detection and stuck search
//! - [`game_state`]: Piece set, scoring, two-phase line clear and game lifecycle
//! - [`pieces`]: Shape catalog and piece identity
//! - [`rng`]: Seedable RNG and triplet generator
//! - [`scoring`]: Placement points and clear feedback
//!
//! # Game Rules
//!
//! - **Piece set**: Three pieces are offered; a new triplet is drawn only when all three are used
//! - **Placement**: A piece fits if its bounding box stays on the board and no filled cell overlaps
//! - **Line clear**: Every full row and every full column clears; each counts as one line
//! - **Scoring**: 10 points per placed cell plus 120 per cleared line
//! - **Game over**: No remaining piece fits anywhere on the post-clear board
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::GameState;
//!
//! let mut game = GameState::new(12345, 0);
//! let piece = game.pieces()[0];
//!
//! // The empty board accepts every catalog shape at the origin.
//! let event = game.place(piece.id, 0, 0).unwrap();
//! assert!(event.points >= 10);
//! assert_eq!(game.score(), event.points);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{is_stuck, is_valid_placement, Board, FullLines};
pub use game_state::{ClearCommit, ClearPhase, GameState, PlaceError};
pub use pieces::{get_shape, Piece, PieceId, Shape};
pub use rng::{PieceGenerator, PieceSet, RandomSource, SimpleRng};
pub use scoring::{calculate_placement_score, feedback_for_clear, ScoreResult};
pub use snapshot::GameSnapshot;
