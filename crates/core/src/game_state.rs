//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, piece generator and
//! scoring. Placement runs in two phases: `place` writes the piece, marks
//! completed lines as exploding and scores them; the marked cells are emptied
//! by `commit_clear`, either directly or when `tick` runs the settle timer
//! down. The stuck check only ever sees the post-clear board.
//!
//! Placement input is rejected while a clear is settling, so a second
//! placement can never be validated against a half-cleared board.

use std::fmt;

use crate::board::{is_stuck, Board};
use crate::pieces::{Piece, PieceId};
use crate::rng::{PieceGenerator, PieceSet, RandomSource, SimpleRng};
use crate::scoring::{calculate_placement_score, feedback_for_clear, FEEDBACK_PHRASES};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Clear phase of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPhase {
    /// No lines pending; placements are accepted.
    Idle,
    /// Completed lines are marked and waiting to be emptied.
    Settling { remaining_ms: u32 },
}

/// Reasons a placement is rejected. A rejected placement never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    GameOver,
    Settling,
    UnknownPiece,
    OutOfBounds,
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::Settling => "settling",
            PlaceError::UnknownPiece => "unknown_piece",
            PlaceError::OutOfBounds | PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game is over",
            PlaceError::Settling => "line clear still settling",
            PlaceError::UnknownPiece => "piece is not in the current set",
            PlaceError::OutOfBounds => "piece would leave the board",
            PlaceError::Blocked => "piece overlaps an occupied cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Core-side event emitted when a settled clear is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommit {
    pub cells_cleared: u32,
    /// The stuck check that followed the clear ended the game.
    pub game_over: bool,
}

/// Complete game state
///
/// Generic over the random source so tests and replays can script the
/// piece stream; the default is the seedable [`SimpleRng`].
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    pieces: PieceSet,
    generator: PieceGenerator<R>,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful placements in this episode.
    placements: u32,
    score: u32,
    high_score: u32,
    game_over: bool,
    phase: ClearPhase,
    settle_ms: u32,
    feedback: Option<Feedback>,
    feedback_ms: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed and a previously stored high score
    pub fn new(seed: u32, high_score: u32) -> Self {
        Self::with_generator(PieceGenerator::new(seed), seed, high_score)
    }

    /// Build a game from an explicit board and piece set
    ///
    /// Used for replays, puzzles and tests. `high_score` is raised to `score`
    /// if it is lower. An empty set is refilled from the generator. Ids of
    /// later generated pieces continue past the largest given id.
    pub fn from_parts(
        board: Board,
        pieces: &[Piece],
        score: u32,
        high_score: u32,
        seed: u32,
    ) -> Self {
        Self::from_parts_with_generator(PieceGenerator::new(seed), board, pieces, score, high_score, seed)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing pieces from `generator`
    ///
    /// `seed` is only recorded for snapshots and logs.
    pub fn with_generator(mut generator: PieceGenerator<R>, seed: u32, high_score: u32) -> Self {
        let pieces = generator.triplet();
        Self {
            board: Board::new(),
            pieces,
            generator,
            seed,
            episode_id: 0,
            placements: 0,
            score: 0,
            high_score,
            game_over: false,
            phase: ClearPhase::Idle,
            settle_ms: SETTLE_DELAY_MS,
            feedback: None,
            feedback_ms: 0,
        }
    }

    /// [`GameState::from_parts`] with an explicit generator
    pub fn from_parts_with_generator(
        mut generator: PieceGenerator<R>,
        board: Board,
        pieces: &[Piece],
        score: u32,
        high_score: u32,
        seed: u32,
    ) -> Self {
        let mut set = PieceSet::new();
        for piece in pieces.iter().take(PIECES_PER_SET) {
            generator.skip_past(piece.id);
            set.push(*piece);
        }
        if set.is_empty() {
            set = generator.triplet();
        }

        let mut state = Self {
            board,
            pieces: set,
            generator,
            seed,
            episode_id: 0,
            placements: 0,
            score,
            high_score: high_score.max(score),
            game_over: false,
            phase: ClearPhase::Idle,
            settle_ms: SETTLE_DELAY_MS,
            feedback: None,
            feedback_ms: 0,
        };
        if state.board.has_exploding() {
            state.phase = ClearPhase::Settling {
                remaining_ms: state.settle_ms,
            };
        } else {
            state.game_over = is_stuck(&state.board, &state.pieces);
        }
        state
    }

    /// Override the settle delay (milliseconds). Zero commits clears on the next tick.
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Find a piece of the current set by id
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.iter().find(|p| p.id == id).copied()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> ClearPhase {
        self.phase
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, ClearPhase::Settling { .. })
    }

    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Whether `piece_id` could be placed at (row, col) right now
    ///
    /// Pure; safe to call on every cursor move.
    pub fn is_valid_placement(&self, piece_id: PieceId, row: i8, col: i8) -> bool {
        self.check_placement(piece_id, row, col).is_ok()
    }

    /// Validate a placement without applying it
    pub fn check_placement(&self, piece_id: PieceId, row: i8, col: i8) -> Result<Piece, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        if self.is_settling() {
            return Err(PlaceError::Settling);
        }
        let piece = self.piece(piece_id).ok_or(PlaceError::UnknownPiece)?;
        let shape = piece.shape();
        if row < 0
            || col < 0
            || row as usize + shape.rows as usize > BOARD_SIZE
            || col as usize + shape.cols as usize > BOARD_SIZE
        {
            return Err(PlaceError::OutOfBounds);
        }
        if !self.board.can_place(&shape, row, col) {
            return Err(PlaceError::Blocked);
        }
        Ok(piece)
    }

    /// Place a piece from the current set with its top-left corner at (row, col)
    ///
    /// Completed rows and columns are scored immediately and marked as
    /// exploding; they are emptied by [`GameState::commit_clear`]. When nothing
    /// was completed the stuck check runs right away.
    pub fn place(&mut self, piece_id: PieceId, row: i8, col: i8) -> Result<PlacementEvent, PlaceError> {
        let piece = self.check_placement(piece_id, row, col)?;
        let shape = piece.shape();

        // Build the next board on a copy; nothing is visible until it is swapped in.
        let mut board = self.board.clone();
        if !board.write_shape(&shape, row, col, piece.color) {
            return Err(PlaceError::Blocked);
        }

        let lines = board.full_lines();
        let line_count = lines.count();
        if !lines.is_empty() {
            board.mark_exploding(&lines);
        }

        let result = calculate_placement_score(shape.area(), line_count);
        let score = self.score.saturating_add(result.total);
        let new_high_score = score > self.high_score;

        self.board = board;
        self.score = score;
        self.high_score = self.high_score.max(score);
        self.placements = self.placements.wrapping_add(1);

        self.pieces.retain(|p| p.id != piece_id);
        let refilled = self.pieces.is_empty();
        if refilled {
            self.pieces = self.generator.triplet();
        }

        let feedback = if line_count > 0 {
            let roll = self.generator.roll(FEEDBACK_PHRASES.len() as u32);
            feedback_for_clear(line_count, roll)
        } else {
            None
        };
        if feedback.is_some() {
            self.feedback = feedback;
            self.feedback_ms = FEEDBACK_MS;
        }

        if line_count > 0 {
            self.phase = ClearPhase::Settling {
                remaining_ms: self.settle_ms,
            };
        } else {
            self.game_over = is_stuck(&self.board, &self.pieces);
        }

        Ok(PlacementEvent {
            piece_id: piece.id.0,
            shape: piece.kind,
            row,
            col,
            cells_placed: shape.area(),
            rows_cleared: lines.rows.len() as u32,
            cols_cleared: lines.cols.len() as u32,
            points: result.total,
            score: self.score,
            high_score: self.high_score,
            new_high_score,
            refilled,
            feedback,
        })
    }

    /// Empty all exploding cells and run the stuck check
    ///
    /// Returns `None` when no clear was pending.
    pub fn commit_clear(&mut self) -> Option<ClearCommit> {
        if !self.is_settling() {
            return None;
        }
        let cells_cleared = self.board.clear_exploding() as u32;
        self.phase = ClearPhase::Idle;
        self.game_over = is_stuck(&self.board, &self.pieces);
        Some(ClearCommit {
            cells_cleared,
            game_over: self.game_over,
        })
    }

    /// Advance timers; commits a pending clear once the settle delay has elapsed
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<ClearCommit> {
        if self.feedback_ms > 0 {
            self.feedback_ms = self.feedback_ms.saturating_sub(elapsed_ms);
            if self.feedback_ms == 0 {
                self.feedback = None;
            }
        }

        match self.phase {
            ClearPhase::Idle => None,
            ClearPhase::Settling { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.commit_clear()
                } else {
                    self.phase = ClearPhase::Settling { remaining_ms };
                    None
                }
            }
        }
    }

    /// Check the current board against the current pieces
    pub fn is_stuck(&self) -> bool {
        is_stuck(&self.board, &self.pieces)
    }

    /// Start over: empty board, fresh triplet, zero score. The high score is kept.
    pub fn restart(&mut self) {
        self.board.clear();
        self.pieces = self.generator.triplet();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.placements = 0;
        self.score = 0;
        self.game_over = false;
        self.phase = ClearPhase::Idle;
        self.feedback = None;
        self.feedback_ms = 0;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.pieces = [None; PIECES_PER_SET];
        for (slot, piece) in out.pieces.iter_mut().zip(self.pieces.iter()) {
            *slot = Some(*piece);
        }
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over;
        out.settle_remaining_ms = match self.phase {
            ClearPhase::Idle => None,
            ClearPhase::Settling { remaining_ms } => Some(remaining_ms),
        };
        out.feedback = self.feedback;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.placements = self.placements;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
