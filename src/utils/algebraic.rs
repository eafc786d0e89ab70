//! Conversions between board locations and algebraic coordinates.
//!
//! Translates human-readable coordinates (e.g., `e4`) to and from the
//! engine's `(row, col)` numbering, where row 0 is rank 8.

use crate::errors::Errors;
use crate::game_state::chess_types::{on_board, BoardLocation};

/// Convert an algebraic coordinate (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, Errors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidAlgebraic);
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(Errors::InvalidAlgebraic);
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(Errors::InvalidAlgebraic);
    }

    let row = (b'8' - rank) as i8;
    let col = (file - b'a') as i8;
    Ok((row, col))
}

/// Convert a board location to algebraic (for example: `(6, 4)` -> "e2").
pub fn location_to_algebraic(x: BoardLocation) -> Result<String, Errors> {
    if !on_board(x) {
        return Err(Errors::OutOfBounds);
    }

    let file_char = char::from(b'a' + x.1 as u8);
    let rank_char = char::from(b'8' - x.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}
