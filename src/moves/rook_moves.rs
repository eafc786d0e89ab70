//! Rook pseudo-legal move generation.

use crate::game_state::chess_types::{Board, BoardLocation, PieceRecord};
use crate::moves::chess_move::ChessMove;
use crate::moves::sliding_moves::generate_sliding_moves;

/// Slide order: up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub fn generate_rook_moves(
    board: &Board,
    mover: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(board, mover, start, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn piece(color: Color, kind: PieceKind) -> PieceRecord {
        PieceRecord { color, kind }
    }

    #[test]
    fn open_board_rook_reaches_fourteen_squares() {
        let mut board = Board::default();
        let rook = piece(Color::Light, PieceKind::Rook);
        *board.at((4, 3)) = Some(rook);

        let mut out = Vec::new();
        generate_rook_moves(&board, rook, (4, 3), &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn friendly_piece_blocks_the_slide_before_its_square() {
        let mut board = Board::default();
        let rook = piece(Color::Light, PieceKind::Rook);
        *board.at((4, 3)) = Some(rook);
        // Friendly pawn two squares up the file.
        *board.at((2, 3)) = Some(piece(Color::Light, PieceKind::Pawn));

        let mut out = Vec::new();
        generate_rook_moves(&board, rook, (4, 3), &mut out);

        let up_file_stops: Vec<BoardLocation> = out
            .iter()
            .filter(|mv| mv.stop.1 == 3 && mv.stop.0 < 4)
            .map(|mv| mv.stop)
            .collect();
        assert_eq!(up_file_stops, vec![(3, 3)]);
    }

    #[test]
    fn enemy_piece_is_captured_and_ends_the_slide() {
        let mut board = Board::default();
        let rook = piece(Color::Light, PieceKind::Rook);
        *board.at((4, 3)) = Some(rook);
        *board.at((2, 3)) = Some(piece(Color::Dark, PieceKind::Pawn));

        let mut out = Vec::new();
        generate_rook_moves(&board, rook, (4, 3), &mut out);

        let up_file_stops: Vec<BoardLocation> = out
            .iter()
            .filter(|mv| mv.stop.1 == 3 && mv.stop.0 < 4)
            .map(|mv| mv.stop)
            .collect();
        assert_eq!(up_file_stops, vec![(3, 3), (2, 3)]);
        let capture = out
            .iter()
            .find(|mv| mv.stop == (2, 3))
            .expect("capture generated");
        assert_eq!(
            capture.captured_piece,
            Some(piece(Color::Dark, PieceKind::Pawn))
        );
    }
}
