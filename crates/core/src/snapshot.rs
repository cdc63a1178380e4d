use crate::pieces::Piece;
use crate::types::{Cell, Feedback, BOARD_SIZE, PIECES_PER_SET};

/// Render-ready copy of the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Remaining pieces in set order; consumed slots are `None` at the end.
    pub pieces: [Option<Piece>; PIECES_PER_SET],
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    /// `Some` while a line clear is settling.
    pub settle_remaining_ms: Option<u32>,
    pub feedback: Option<Feedback>,
    pub episode_id: u32,
    pub seed: u32,
    pub placements: u32,
}

impl GameSnapshot {
    /// Number of pieces still available
    pub fn piece_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::EMPTY; BOARD_SIZE]; BOARD_SIZE],
            pieces: [None; PIECES_PER_SET],
            score: 0,
            high_score: 0,
            game_over: false,
            settle_remaining_ms: None,
            feedback: None,
            episode_id: 0,
            seed: 0,
            placements: 0,
        }
    }
}
