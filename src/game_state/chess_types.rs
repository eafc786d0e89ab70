//! Core board and piece types for the mailbox rules engine.

use crate::errors::Errors;

/// Side to move. `Light` is the white side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Back-most rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Rank this color's pawns start on.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

/// Piece kind (color is carried separately on the piece record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece as stored in a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub color: Color,
    pub kind: PieceKind,
}

/// Board coordinate as `(row, col)`, both in `0..=7`.
/// Row 0 is Dark's home rank and row 7 is Light's home rank.
pub type BoardLocation = (i8, i8);

#[inline]
pub fn on_board(x: BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Offsets `x` by `(d_row, d_col)`, failing when the result leaves the board.
pub fn move_board_location(
    x: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, Errors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if on_board(y) {
        Ok(y)
    } else {
        Err(Errors::OutOfBounds)
    }
}

/// 8x8 mailbox of piece records.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn at(&mut self, x: BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.0 as usize][x.1 as usize]
    }
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.0 as usize][x.1 as usize]
    }
}
