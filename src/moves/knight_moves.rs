//! Knight pseudo-legal move generation.

use crate::game_state::chess_types::{move_board_location, Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;

/// Jump offsets in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    for offset in KNIGHT_OFFSETS {
        let Ok(stop) = move_board_location(start, offset.0, offset.1) else {
            continue;
        };
        match *board.view(stop) {
            None => out.push(ChessMove::new(start, stop, mover, None)),
            Some(occupant) if occupant.color != mover.color => {
                out.push(ChessMove::new(start, stop, mover, Some(occupant)));
            }
            Some(_) => {}
        }
    }
}
