//! Immutable description of a single board transition.
//!
//! A `ChessMove` snapshots the mover and the captured occupant at
//! construction time so the move log can restore both cells on undo.

use crate::errors::Errors;
use crate::game_state::chess_types::{on_board, Board, BoardLocation, PieceKind, PieceRecord};
use crate::utils::algebraic::location_to_algebraic;

#[derive(Debug, Clone)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub moved_piece: PieceRecord,
    pub captured_piece: Option<PieceRecord>,
    pub is_promotion: bool,
}

impl ChessMove {
    /// Builds a move for a mover already known to sit on `start`. The
    /// promotion flag is derived here: a pawn whose destination row is the
    /// back-most rank for its color.
    pub fn new(
        start: BoardLocation,
        stop: BoardLocation,
        moved_piece: PieceRecord,
        captured_piece: Option<PieceRecord>,
    ) -> Self {
        let is_promotion = moved_piece.kind == PieceKind::Pawn
            && stop.0 == moved_piece.color.promotion_row();
        ChessMove {
            start,
            stop,
            moved_piece,
            captured_piece,
            is_promotion,
        }
    }

    /// Translates a raw coordinate pair into a comparable move by reading the
    /// mover and captured piece from `board`. This is the front-end path for
    /// matching a submitted square pair against a pregenerated legal-move
    /// list.
    pub fn from_board(
        start: BoardLocation,
        stop: BoardLocation,
        board: &Board,
    ) -> Result<Self, Errors> {
        if !on_board(start) || !on_board(stop) {
            return Err(Errors::OutOfBounds);
        }
        let Some(moved_piece) = *board.view(start) else {
            return Err(Errors::TryingToMoveNonExistantPiece(start));
        };
        Ok(Self::new(start, stop, moved_piece, *board.view(stop)))
    }

    /// Compact identity used for move-list membership tests.
    #[inline]
    pub fn move_id(&self) -> i16 {
        (self.start.0 as i16) * 1000
            + (self.start.1 as i16) * 100
            + (self.stop.0 as i16) * 10
            + self.stop.1 as i16
    }

    /// Human-readable descriptor such as "e2 -> e4".
    pub fn to_chess_notation(&self) -> Result<String, Errors> {
        Ok(format!(
            "{} -> {}",
            location_to_algebraic(self.start)?,
            location_to_algebraic(self.stop)?
        ))
    }
}

/// Identity is the coordinate 4-tuple only; the mover/captured/promotion
/// bookkeeping is deliberately ignored so a move built from a submitted
/// coordinate pair compares equal to its pregenerated counterpart.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for ChessMove {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn pawn(color: Color) -> PieceRecord {
        PieceRecord {
            color,
            kind: PieceKind::Pawn,
        }
    }

    #[test]
    fn equality_ignores_captured_piece_and_promotion_bookkeeping() {
        let plain = ChessMove::new((6, 4), (4, 4), pawn(Color::Light), None);
        let with_capture = ChessMove::new(
            (6, 4),
            (4, 4),
            pawn(Color::Light),
            Some(PieceRecord {
                color: Color::Dark,
                kind: PieceKind::Knight,
            }),
        );
        assert_eq!(plain, with_capture);

        let different_stop = ChessMove::new((6, 4), (5, 4), pawn(Color::Light), None);
        assert_ne!(plain, different_stop);
    }

    #[test]
    fn move_id_packs_the_coordinate_tuple() {
        let mv = ChessMove::new((6, 4), (4, 4), pawn(Color::Light), None);
        assert_eq!(mv.move_id(), 6444);
    }

    #[test]
    fn promotion_is_flagged_only_on_the_back_rank() {
        let promoting = ChessMove::new((1, 0), (0, 0), pawn(Color::Light), None);
        assert!(promoting.is_promotion);

        let advancing = ChessMove::new((2, 0), (1, 0), pawn(Color::Light), None);
        assert!(!advancing.is_promotion);

        let dark_promoting = ChessMove::new((6, 3), (7, 3), pawn(Color::Dark), None);
        assert!(dark_promoting.is_promotion);

        let king_to_back_rank = ChessMove::new(
            (1, 4),
            (0, 4),
            PieceRecord {
                color: Color::Light,
                kind: PieceKind::King,
            },
            None,
        );
        assert!(!king_to_back_rank.is_promotion);
    }

    #[test]
    fn from_board_rejects_empty_start_squares_and_bad_coordinates() {
        let mut board = Board::default();
        *board.at((6, 4)) = Some(pawn(Color::Light));

        assert!(ChessMove::from_board((6, 4), (4, 4), &board).is_ok());
        assert!(matches!(
            ChessMove::from_board((5, 5), (4, 5), &board),
            Err(Errors::TryingToMoveNonExistantPiece((5, 5)))
        ));
        assert!(matches!(
            ChessMove::from_board((8, 0), (4, 5), &board),
            Err(Errors::OutOfBounds)
        ));
    }

    #[test]
    fn chess_notation_uses_algebraic_coordinates() {
        let mv = ChessMove::new((6, 4), (4, 4), pawn(Color::Light), None);
        assert_eq!(mv.to_chess_notation().expect("on board"), "e2 -> e4");
    }
}
