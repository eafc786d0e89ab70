//! Bishop pseudo-legal move generation.

use crate::game_state::chess_types::{Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_moves::generate_sliding_moves;

/// Slide order: up-left, up-right, down-left, down-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(board, mover, start, &BISHOP_DIRECTIONS, out);
}
