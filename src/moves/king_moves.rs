//! King pseudo-legal move generation.
//!
//! One step in any direction; castling is not part of the rule set. Moving
//! into check is not handled here, the legality filter discards it.

use crate::game_state::chess_types::{move_board_location, Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;

/// Step offsets in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    for offset in KING_OFFSETS {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn center_king_has_eight_moves_and_corner_king_three() {
        let king = PieceRecord {
            color: Color::Light,
            kind: PieceKind::King,
        };

        let mut board = Board::default();
        *board.at((4, 4)) = Some(king);
        let mut out = Vec::new();
        generate_king_moves(&board, king, (4, 4), &mut out);
        assert_eq!(out.len(), 8);

        let mut board = Board::default();
        *board.at((7, 0)) = Some(king);
        out.clear();
        generate_king_moves(&board, king, (7, 0), &mut out);
        assert_eq!(out.len(), 3);
    }
}
