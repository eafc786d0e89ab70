//! Pseudo-legal move generation over the full board.

use crate::game_state::chess_types::{Board, BoardLocation, Color, PieceKind};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Generates every pseudo-legal move for `side`, scanning the board row-major
/// and dispatching to the per-piece generators. The side is an explicit
/// parameter so attack tests can generate for either color without touching
/// the turn flag.
pub fn generate_all_moves(board: &Board, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for row in 0..8i8 {
        for col in 0..8i8 {
            let start: BoardLocation = (row, col);
            let Some(mover) = *board.view(start) else {
                continue;
            };
            if mover.color != side {
                continue;
            }
            match mover.kind {
                PieceKind::Pawn => generate_pawn_moves(board, mover, start, &mut out),
                PieceKind::Knight => generate_knight_moves(board, mover, start, &mut out),
                PieceKind::Bishop => generate_bishop_moves(board, mover, start, &mut out),
                PieceKind::Rook => generate_rook_moves(board, mover, start, &mut out),
                PieceKind::Queen => generate_queen_moves(board, mover, start, &mut out),
                PieceKind::King => generate_king_moves(board, mover, start, &mut out),
            }
        }
    }
    out
}
