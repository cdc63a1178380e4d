//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 7 x 7 cells
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 at the left
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_POINTS` | 10 | Points per filled cell of a placed piece |
//! | `LINE_BONUS` | 120 | Points per full row or column cleared |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 400 | Window between marking lines and emptying them |
//! | `FEEDBACK_MS` | 2000 | Lifetime of a feedback message |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{BlockColor, GameAction, ShapeKind, BOARD_SIZE};
//!
//! // Parse a color (case-insensitive)
//! assert_eq!(BlockColor::from_str("Lime"), Some(BlockColor::Lime));
//!
//! // Parse a shape kind
//! assert_eq!(ShapeKind::from_str("z"), Some(ShapeKind::Z));
//!
//! // Parse a game action
//! assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
//!
//! assert_eq!(BOARD_SIZE, 7);
//! ```

/// Board side length in cells (7 x 7)
pub const BOARD_SIZE: usize = 7;

/// Number of pieces offered to the player at once
pub const PIECES_PER_SET: usize = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default settle delay between marking cleared lines and emptying them (400ms)
pub const SETTLE_DELAY_MS: u32 = 400;

/// Lifetime of a feedback message (2000ms)
pub const FEEDBACK_MS: u32 = 2000;

/// Points awarded per filled cell of a placed piece
pub const CELL_POINTS: u32 = 10;

/// Points awarded per full row or column cleared
pub const LINE_BONUS: u32 = 120;


/// The six palette colors a piece can carry
///
/// The "none" tag of an empty cell is expressed as `Option<BlockColor>::None`
/// on [`Cell`], so an uncolored piece cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Pink,
    Cyan,
    Lime,
    Orange,
    Purple,
    Yellow,
}

impl BlockColor {
    /// Palette in generation order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Pink,
        BlockColor::Cyan,
        BlockColor::Lime,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Yellow,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("pink"), Some(BlockColor::Pink));
    /// assert_eq!(BlockColor::from_str("YELLOW"), Some(BlockColor::Yellow));
    /// assert_eq!(BlockColor::from_str("none"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pink" => Some(BlockColor::Pink),
            "cyan" => Some(BlockColor::Cyan),
            "lime" => Some(BlockColor::Lime),
            "orange" => Some(BlockColor::Orange),
            "purple" => Some(BlockColor::Purple),
            "yellow" => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Pink => "pink",
            BlockColor::Cyan => "cyan",
            BlockColor::Lime => "lime",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Yellow => "yellow",
        }
    }

    /// Position in [`BlockColor::ALL`]
    pub fn index(&self) -> usize {
        match self {
            BlockColor::Pink => 0,
            BlockColor::Cyan => 1,
            BlockColor::Lime => 2,
            BlockColor::Orange => 3,
            BlockColor::Purple => 4,
            BlockColor::Yellow => 5,
        }
    }
}

/// The ten catalog shapes
///
/// Shapes are fixed templates; they are never rotated or mirrored.
/// - **Dot**: single cell
/// - **DominoH / DominoV**: 1x2 horizontal / vertical
/// - **TrominoH / TrominoV**: 1x3 horizontal / vertical
/// - **Square**: 2x2
/// - **T**: three across with one below the middle
/// - **L**: three down with a foot to the right
/// - **Block**: 3x3 solid
/// - **Z**: two across, then two across shifted right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Dot,
    DominoH,
    DominoV,
    TrominoH,
    TrominoV,
    Square,
    T,
    L,
    Block,
    Z,
}

impl ShapeKind {
    /// Catalog in generation order
    pub const ALL: [ShapeKind; 10] = [
        ShapeKind::Dot,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::TrominoH,
        ShapeKind::TrominoV,
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::Block,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("dot"), Some(ShapeKind::Dot));
    /// assert_eq!(ShapeKind::from_str("DominoV"), Some(ShapeKind::DominoV));
    /// assert_eq!(ShapeKind::from_str("hexomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Some(ShapeKind::Dot),
            "dominoh" => Some(ShapeKind::DominoH),
            "dominov" => Some(ShapeKind::DominoV),
            "trominoh" => Some(ShapeKind::TrominoH),
            "trominov" => Some(ShapeKind::TrominoV),
            "square" => Some(ShapeKind::Square),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "block" => Some(ShapeKind::Block),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Dot => "dot",
            ShapeKind::DominoH => "dominoH",
            ShapeKind::DominoV => "dominoV",
            ShapeKind::TrominoH => "trominoH",
            ShapeKind::TrominoV => "trominoV",
            ShapeKind::Square => "square",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::Block => "block",
            ShapeKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `color: None`: empty cell
/// - `color: Some(c)`: cell filled with color `c`
///
/// `exploding` marks a cell that belongs to a completed line and is waiting
/// for the clear to be committed. It does not change occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub color: Option<BlockColor>,
    pub exploding: bool,
}

impl Cell {
    /// An unoccupied cell
    pub const EMPTY: Cell = Cell {
        color: None,
        exploding: false,
    };

    /// An occupied cell with the given color
    pub const fn filled(color: BlockColor) -> Self {
        Self {
            color: Some(color),
            exploding: false,
        }
    }

    /// Whether the cell holds a block
    pub fn occupied(&self) -> bool {
        self.color.is_some()
    }
}

/// Game actions that can be applied by the player
///
/// The cursor is the top-left anchor where the selected piece would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Select a piece by its slot in the set (0-based)
    Select(u8),
    /// Select the next remaining piece
    CycleSelection,
    /// Place the selected piece at the cursor
    Place,
    /// Switch to the next built-in theme
    CycleTheme,
    /// Restart the game (when game over or at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("select2"), Some(GameAction::Select(1)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "select1" => Some(GameAction::Select(0)),
            "select2" => Some(GameAction::Select(1)),
            "select3" => Some(GameAction::Select(2)),
            "cycleselection" => Some(GameAction::CycleSelection),
            "place" => Some(GameAction::Place),
            "cycletheme" => Some(GameAction::CycleTheme),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Select(0) => "select1",
            GameAction::Select(1) => "select2",
            GameAction::Select(_) => "select3",
            GameAction::CycleSelection => "cycleSelection",
            GameAction::Place => "place",
            GameAction::CycleTheme => "cycleTheme",
            GameAction::Restart => "restart",
        }
    }
}

/// Transient message shown after a placement clears lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub message: &'static str,
    /// Two or more lines cleared by one placement.
    pub mega: bool,
}

/// Core-side event emitted after a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEvent {
    pub piece_id: u32,
    pub shape: ShapeKind,
    pub row: i8,
    pub col: i8,
    pub cells_placed: u32,
    pub rows_cleared: u32,
    pub cols_cleared: u32,
    pub points: u32,
    pub score: u32,
    pub high_score: u32,
    /// `high_score` was raised by this placement.
    pub new_high_score: bool,
    /// The piece set ran out and a new triplet was drawn.
    pub refilled: bool,
    pub feedback: Option<Feedback>,
}

impl PlacementEvent {
    /// Full rows plus full columns; an intersecting row and column count twice.
    pub fn lines_cleared(&self) -> u32 {
        self.rows_cleared + self.cols_cleared
    }
}
