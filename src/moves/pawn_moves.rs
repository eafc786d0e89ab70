//! Pawn pseudo-legal move generation.
//!
//! Single advance to an empty square, double advance from the start rank
//! through two empty squares, and diagonal captures of enemy pieces only.
//! En-passant is not part of the rule set; promotion is flagged on the move
//! record and resolved by `make_move`.

use crate::game_state::chess_types::{move_board_location, Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    let step = mover.color.pawn_step();

    if let Ok(one_ahead) = move_board_location(start, step, 0) {
        if board.view(one_ahead).is_none() {
            out.push(ChessMove::new(start, one_ahead, mover, None));
            if start.0 == mover.color.pawn_start_row() {
                if let Ok(two_ahead) = move_board_location(start, 2 * step, 0) {
                    if board.view(two_ahead).is_none() {
                        out.push(ChessMove::new(start, two_ahead, mover, None));
                    }
                }
            }
        }
    }

    for col_delta in [-1, 1] {
        let Ok(target) = move_board_location(start, step, col_delta) else {
            continue;
        };
        if let Some(occupant) = *board.view(target) {
            if occupant.color != mover.color {
                out.push(ChessMove::new(start, target, mover, Some(occupant)));
            }
        }
    }
}
