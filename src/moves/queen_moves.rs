//! Queen pseudo-legal move generation.
//!
//! The queen is the union of the rook and bishop patterns, emitted in that
//! order to keep the generation sequence deterministic.

use crate::game_state::chess_types::{Board, BoardLocation, PieceRecord};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(board, mover, start, out);
    generate_bishop_moves(board, mover, start, out);
}
