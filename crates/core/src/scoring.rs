//! Scoring module - placement points and clear feedback
//!
//! Points for one placement are `CELL_POINTS` per filled cell of the piece
//! plus `LINE_BONUS` per completed row or column. There are no multipliers,
//! streaks or decay; the high score is a running maximum kept by the game.

use crate::types::{Feedback, CELL_POINTS, LINE_BONUS};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cells of the placed piece.
    pub cell_score: u32,
    /// Points for completed rows and columns.
    pub line_bonus: u32,
    pub total: u32,
}

/// Points for the filled cells of a placed piece
pub fn calculate_cell_score(cells: u32) -> u32 {
    cells.saturating_mul(CELL_POINTS)
}

/// Points for completed lines (rows + columns)
pub fn calculate_line_bonus(lines: u32) -> u32 {
    lines.saturating_mul(LINE_BONUS)
}

/// Calculate the complete score for one placement
pub fn calculate_placement_score(cells: u32, lines: u32) -> ScoreResult {
    let cell_score = calculate_cell_score(cells);
    let line_bonus = calculate_line_bonus(lines);
    ScoreResult {
        cell_score,
        line_bonus,
        total: cell_score.saturating_add(line_bonus),
    }
}

/// Phrases shown for a single-line clear
pub const FEEDBACK_PHRASES: [&str; 8] = [
    "AWESOME!",
    "NOW THAT'S WHAT I CALL BINGO!",
    "MAGNIFICENT MOVE!",
    "COLOR FEAST!",
    "MASTER OF BLOCKS!",
    "UNSTOPPABLE!",
    "BINGOOO!",
    "GREAT COMBO!",
];

/// Phrase shown when one placement completes two or more lines
pub const MEGA_PHRASE: &str = "NOW THAT'S WHAT I CALL BINGO!";

/// Whether a clear is big enough for the mega feedback
pub fn is_mega_clear(lines: u32) -> bool {
    lines >= 2
}

/// Pick the feedback for a placement
///
/// `roll` selects among the single-line phrases and is ignored otherwise.
pub fn feedback_for_clear(lines: u32, roll: u32) -> Option<Feedback> {
    match lines {
        0 => None,
        1 => Some(Feedback {
            message: FEEDBACK_PHRASES[roll as usize % FEEDBACK_PHRASES.len()],
            mega: false,
        }),
        _ => Some(Feedback {
            message: MEGA_PHRASE,
            mega: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_score() {
        assert_eq!(calculate_cell_score(0), 0);
        assert_eq!(calculate_cell_score(1), 10);
        assert_eq!(calculate_cell_score(9), 90);
    }

    #[test]
    fn test_line_bonus() {
        assert_eq!(calculate_line_bonus(0), 0);
        assert_eq!(calculate_line_bonus(1), 120);
        assert_eq!(calculate_line_bonus(2), 240);
        // A 3x3 block can complete three rows and three columns at once.
        assert_eq!(calculate_line_bonus(6), 720);
    }

    #[test]
    fn test_full_score_calculation() {
        let result = calculate_placement_score(3, 1);
        assert_eq!(result.cell_score, 30);
        assert_eq!(result.line_bonus, 120);
        assert_eq!(result.total, 150);

        let result = calculate_placement_score(1, 0);
        assert_eq!(result.total, 10);
    }

    #[test]
    fn test_no_feedback_without_clear() {
        assert_eq!(feedback_for_clear(0, 3), None);
    }

    #[test]
    fn test_single_clear_uses_phrase_table() {
        let fb = feedback_for_clear(1, 2).unwrap();
        assert_eq!(fb.message, FEEDBACK_PHRASES[2]);
        assert!(!fb.mega);

        // Rolls wrap around the table.
        let fb = feedback_for_clear(1, 10).unwrap();
        assert_eq!(fb.message, FEEDBACK_PHRASES[2]);
    }

    #[test]
    fn test_mega_clear() {
        assert!(!is_mega_clear(1));
        assert!(is_mega_clear(2));
        let fb = feedback_for_clear(3, 0).unwrap();
        assert_eq!(fb.message, MEGA_PHRASE);
        assert!(fb.mega);
    }
}
