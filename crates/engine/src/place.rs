use std::fmt;

use crate::core::{get_shape, GameState, Piece, PlaceError, RandomSource};
use crate::types::{GameAction, PlacementEvent, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    NoPieceSelected,
    SlotEmpty,
    Place(PlaceError),
}

impl ControlError {
    pub fn code(self) -> &'static str {
        match self {
            ControlError::NoPieceSelected | ControlError::SlotEmpty => "no_piece",
            ControlError::Place(e) => e.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ControlError::NoPieceSelected => "no piece selected",
            ControlError::SlotEmpty => "that slot is empty",
            ControlError::Place(e) => e.message(),
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ControlError {}

impl From<PlaceError> for ControlError {
    fn from(value: PlaceError) -> Self {
        ControlError::Place(value)
    }
}

/// What an applied action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    Moved,
    Selected(usize),
    Placed(PlacementEvent),
    Restarted,
    /// Theme switching belongs to the presentation layer.
    ThemeRequested,
    /// The action had no effect (e.g. cursor already at the edge).
    Unchanged,
}

/// Where the selected piece would land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub piece: Piece,
    pub row: i8,
    pub col: i8,
    pub valid: bool,
}

/// Player-side selection and cursor
///
/// The cursor is the top-left anchor of the selected piece and is kept
/// inside the range where the piece's bounding box fits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    slot: usize,
    row: i8,
    col: i8,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            slot: 0,
            row: (BOARD_SIZE / 2) as i8,
            col: (BOARD_SIZE / 2) as i8,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn cursor(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    /// The piece in the selected slot, if any remain
    pub fn selected_piece<R: RandomSource>(&self, state: &GameState<R>) -> Option<Piece> {
        let pieces = state.pieces();
        pieces.get(self.slot.min(pieces.len().saturating_sub(1))).copied()
    }

    /// Preview of the selected piece at the cursor
    pub fn preview<R: RandomSource>(&self, state: &GameState<R>) -> Option<Preview> {
        if state.game_over() {
            return None;
        }
        let piece = self.selected_piece(state)?;
        Some(Preview {
            piece,
            row: self.row,
            col: self.col,
            valid: state.is_valid_placement(piece.id, self.row, self.col),
        })
    }

    /// Pull the cursor back so the selected piece's bounding box fits
    fn clamp_cursor<R: RandomSource>(&mut self, state: &GameState<R>) {
        let (rows, cols) = match self.selected_piece(state) {
            Some(p) => {
                let shape = get_shape(p.kind);
                (shape.rows as usize, shape.cols as usize)
            }
            None => (1, 1),
        };
        let max_row = (BOARD_SIZE - rows) as i8;
        let max_col = (BOARD_SIZE - cols) as i8;
        self.row = self.row.clamp(0, max_row);
        self.col = self.col.clamp(0, max_col);
    }

    /// Keep slot and cursor valid after the piece set changed
    pub fn sync<R: RandomSource>(&mut self, state: &GameState<R>) {
        let len = state.pieces().len();
        if self.slot >= len {
            self.slot = len.saturating_sub(1);
        }
        self.clamp_cursor(state);
    }

    fn move_cursor<R: RandomSource>(
        &mut self,
        state: &GameState<R>,
        dr: i8,
        dc: i8,
    ) -> ControlOutcome {
        let before = (self.row, self.col);
        self.row = self.row.saturating_add(dr);
        self.col = self.col.saturating_add(dc);
        self.clamp_cursor(state);
        if (self.row, self.col) == before {
            ControlOutcome::Unchanged
        } else {
            ControlOutcome::Moved
        }
    }

    fn select<R: RandomSource>(
        &mut self,
        state: &GameState<R>,
        slot: usize,
    ) -> Result<ControlOutcome, ControlError> {
        if slot >= state.pieces().len() {
            return Err(ControlError::SlotEmpty);
        }
        self.slot = slot;
        self.clamp_cursor(state);
        Ok(ControlOutcome::Selected(slot))
    }

    /// Apply a player action to the game
    ///
    /// Rejected placements leave both the game and the controller unchanged.
    pub fn apply_action<R: RandomSource>(
        &mut self,
        state: &mut GameState<R>,
        action: GameAction,
    ) -> Result<ControlOutcome, ControlError> {
        match action {
            GameAction::MoveUp => Ok(self.move_cursor(state, -1, 0)),
            GameAction::MoveDown => Ok(self.move_cursor(state, 1, 0)),
            GameAction::MoveLeft => Ok(self.move_cursor(state, 0, -1)),
            GameAction::MoveRight => Ok(self.move_cursor(state, 0, 1)),
            GameAction::Select(slot) => self.select(state, slot as usize),
            GameAction::CycleSelection => {
                let len = state.pieces().len();
                if len == 0 {
                    return Err(ControlError::NoPieceSelected);
                }
                self.select(state, (self.slot + 1) % len)
            }
            GameAction::Place => {
                let piece = self
                    .selected_piece(state)
                    .ok_or(ControlError::NoPieceSelected)?;
                let event = state.place(piece.id, self.row, self.col)?;
                self.sync(state);
                Ok(ControlOutcome::Placed(event))
            }
            GameAction::CycleTheme => Ok(ControlOutcome::ThemeRequested),
            GameAction::Restart => {
                state.restart();
                *self = Self::new();
                self.sync(state);
                Ok(ControlOutcome::Restarted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PieceId};
    use crate::types::{BlockColor, ShapeKind};

    fn state_with(kinds: &[ShapeKind]) -> GameState {
        let pieces: Vec<Piece> = kinds
            .iter()
            .enumerate()
            .map(|(i, k)| Piece::new(PieceId(i as u32 + 1), *k, BlockColor::Cyan))
            .collect();
        GameState::from_parts(Board::new(), &pieces, 0, 0, 1)
    }

    #[test]
    fn cursor_clamps_to_piece_bounding_box() {
        let mut state = state_with(&[ShapeKind::Block]);
        let mut ctl = Controller::new();
        ctl.sync(&state);

        for _ in 0..10 {
            ctl.apply_action(&mut state, GameAction::MoveRight).unwrap();
            ctl.apply_action(&mut state, GameAction::MoveDown).unwrap();
        }
        assert_eq!(ctl.cursor(), (4, 4));
        assert_eq!(
            ctl.apply_action(&mut state, GameAction::MoveRight),
            Ok(ControlOutcome::Unchanged)
        );
    }

    #[test]
    fn selecting_wider_piece_reclamps_cursor() {
        let mut state = state_with(&[ShapeKind::Dot, ShapeKind::TrominoH]);
        let mut ctl = Controller::new();
        for _ in 0..10 {
            ctl.apply_action(&mut state, GameAction::MoveRight).unwrap();
        }
        assert_eq!(ctl.cursor().1, 6);

        ctl.apply_action(&mut state, GameAction::Select(1)).unwrap();
        assert_eq!(ctl.cursor().1, 4);
    }

    #[test]
    fn select_empty_slot_is_error() {
        let mut state = state_with(&[ShapeKind::Dot]);
        let mut ctl = Controller::new();
        assert_eq!(
            ctl.apply_action(&mut state, GameAction::Select(2)),
            Err(ControlError::SlotEmpty)
        );
        assert_eq!(ctl.slot(), 0);
    }

    #[test]
    fn place_consumes_selected_piece_and_resyncs() {
        let mut state = state_with(&[ShapeKind::Dot, ShapeKind::Square]);
        let mut ctl = Controller::new();
        ctl.apply_action(&mut state, GameAction::Select(1)).unwrap();

        let outcome = ctl.apply_action(&mut state, GameAction::Place).unwrap();
        match outcome {
            ControlOutcome::Placed(ev) => assert_eq!(ev.points, 40),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(state.pieces().len(), 1);
        assert_eq!(ctl.slot(), 0);
        assert_eq!(ctl.selected_piece(&state).unwrap().kind, ShapeKind::Dot);
    }

    #[test]
    fn blocked_place_reports_place_error() {
        let mut state = state_with(&[ShapeKind::Dot, ShapeKind::Dot]);
        let mut ctl = Controller::new();
        ctl.apply_action(&mut state, GameAction::Place).unwrap();

        // Second dot at the same cursor overlaps.
        let err = ctl.apply_action(&mut state, GameAction::Place).unwrap_err();
        assert_eq!(err, ControlError::Place(PlaceError::Blocked));
        assert_eq!(err.code(), "invalid_place");

        let preview = ctl.preview(&state).unwrap();
        assert!(!preview.valid);
    }

    #[test]
    fn restart_resets_controller() {
        let mut state = state_with(&[ShapeKind::Dot]);
        let mut ctl = Controller::new();
        ctl.apply_action(&mut state, GameAction::MoveUp).unwrap();
        assert_eq!(
            ctl.apply_action(&mut state, GameAction::Restart),
            Ok(ControlOutcome::Restarted)
        );
        assert_eq!(ctl.slot(), 0);
        assert_eq!(state.pieces().len(), 3);
        assert_eq!(state.episode_id(), 1);
    }

    #[test]
    fn cycle_selection_wraps() {
        let mut state = state_with(&[ShapeKind::Dot, ShapeKind::Dot, ShapeKind::Dot]);
        let mut ctl = Controller::new();
        for expected in [1, 2, 0] {
            assert_eq!(
                ctl.apply_action(&mut state, GameAction::CycleSelection),
                Ok(ControlOutcome::Selected(expected))
            );
        }
    }
}
