//! Shared slide loop for the long-range pieces.

use crate::game_state::chess_types::{move_board_location, Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;

/// Walks each direction up to seven steps: empty squares are pushed and the
/// slide continues, an enemy occupant is pushed as a capture and ends the
/// slide, a friendly occupant ends the slide before its square.
pub fn generate_sliding_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for direction in directions {
        for step in 1..8 {
            let Ok(stop) = move_board_location(start, direction.0 * step, direction.1 * step)
            else {
                break;
            };
            match *board.view(stop) {
                None => out.push(ChessMove::new(start, stop, mover, None)),
                Some(occupant) if occupant.color != mover.color => {
                    out.push(ChessMove::new(start, stop, mover, Some(occupant)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
