//! Pieces module - shape catalog and piece identity
//!
//! Every shape is a fixed rectangular template listed as the `(row, col)`
//! offsets of its filled cells relative to the top-left corner of its
//! bounding box. Templates are never rotated or mirrored.

use std::fmt;

use crate::types::{BlockColor, ShapeKind};

/// Offset of a single filled cell relative to the shape's top-left corner
pub type CellOffset = (u8, u8);

/// Immutable shape template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Bounding box height
    pub rows: u8,
    /// Bounding box width
    pub cols: u8,
    /// Filled cells, row-major
    pub cells: &'static [CellOffset],
}

impl Shape {
    /// Number of filled cells
    pub fn area(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Whether the template has a filled cell at `(row, col)`
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        self.cells.contains(&(row, col))
    }
}

const DOT: [CellOffset; 1] = [(0, 0)];
const DOMINO_H: [CellOffset; 2] = [(0, 0), (0, 1)];
const DOMINO_V: [CellOffset; 2] = [(0, 0), (1, 0)];
const TROMINO_H: [CellOffset; 3] = [(0, 0), (0, 1), (0, 2)];
const TROMINO_V: [CellOffset; 3] = [(0, 0), (1, 0), (2, 0)];
const SQUARE: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const T_SHAPE: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 1)];
const L_SHAPE: [CellOffset; 4] = [(0, 0), (1, 0), (2, 0), (2, 1)];
const BLOCK: [CellOffset; 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
const Z_SHAPE: [CellOffset; 4] = [(0, 0), (0, 1), (1, 1), (1, 2)];

/// Get the template for a shape kind
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Dot => Shape { rows: 1, cols: 1, cells: &DOT },
        ShapeKind::DominoH => Shape { rows: 1, cols: 2, cells: &DOMINO_H },
        ShapeKind::DominoV => Shape { rows: 2, cols: 1, cells: &DOMINO_V },
        ShapeKind::TrominoH => Shape { rows: 1, cols: 3, cells: &TROMINO_H },
        ShapeKind::TrominoV => Shape { rows: 3, cols: 1, cells: &TROMINO_V },
        ShapeKind::Square => Shape { rows: 2, cols: 2, cells: &SQUARE },
        ShapeKind::T => Shape { rows: 2, cols: 3, cells: &T_SHAPE },
        ShapeKind::L => Shape { rows: 3, cols: 2, cells: &L_SHAPE },
        ShapeKind::Block => Shape { rows: 3, cols: 3, cells: &BLOCK },
        ShapeKind::Z => Shape { rows: 2, cols: 3, cells: &Z_SHAPE },
    }
}

/// Identity of a generated piece, unique within one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placeable piece: a catalog shape plus a palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub kind: ShapeKind,
    pub color: BlockColor,
}

impl Piece {
    pub fn new(id: PieceId, kind: ShapeKind, color: BlockColor) -> Self {
        Self { id, kind, color }
    }

    /// Get the shape template of this piece
    pub fn shape(&self) -> Shape {
        get_shape(self.kind)
    }
}
