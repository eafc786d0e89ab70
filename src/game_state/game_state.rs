//! Core mutable game state with make/undo move support.
//!
//! `GameState` owns the mailbox board, the side-to-move flag, the cached king
//! locations, and the move log driving single-step undo. It is designed for a
//! single logical owner issuing make/undo/query calls strictly sequentially.

use crate::errors::Errors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // Derived caches of the two king squares, kept in lock-step with the
    // board by `make_move` / `undo_move` so check tests avoid a board scan.
    pub light_king_location: BoardLocation,
    pub dark_king_location: BoardLocation,

    /// Applied-move history, append-only except for pop-from-end on undo.
    pub move_log: Vec<ChessMove>,

    // Terminal flags, only meaningful immediately after the most recent
    // `get_valid_moves` call.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, Errors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> BoardLocation {
        match color {
            Color::Light => self.light_king_location,
            Color::Dark => self.dark_king_location,
        }
    }

    /// Executes `mv` on the board, logs it, and flips the turn. Performs no
    /// legality check; callers must only pass moves obtained from
    /// `get_valid_moves` or matched against its output.
    pub fn make_move(&mut self, mv: ChessMove) {
        *self.board.at(mv.start) = None;
        *self.board.at(mv.stop) = Some(mv.moved_piece);
        if mv.moved_piece.kind == PieceKind::King {
            self.set_king_location(mv.moved_piece.color, mv.stop);
        }
        // Promotion is hard-coded to a queen; no underpromotion choice.
        if mv.is_promotion {
            *self.board.at(mv.stop) = Some(PieceRecord {
                color: mv.moved_piece.color,
                kind: PieceKind::Queen,
            });
        }
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverts the most recent move. Safe no-op on an empty log, except that
    /// the terminal flags are always cleared: they describe the position the
    /// last `get_valid_moves` call saw, which any undo invalidates.
    pub fn undo_move(&mut self) {
        if let Some(mv) = self.move_log.pop() {
            // The log records the pre-promotion mover, so undoing a promotion
            // puts the pawn back rather than the queen.
            *self.board.at(mv.start) = Some(mv.moved_piece);
            *self.board.at(mv.stop) = mv.captured_piece;
            if mv.moved_piece.kind == PieceKind::King {
                self.set_king_location(mv.moved_piece.color, mv.start);
            }
            self.side_to_move = self.side_to_move.opposite();
        }
        self.checkmate = false;
        self.stalemate = false;
    }

    #[inline]
    fn set_king_location(&mut self, color: Color, location: BoardLocation) {
        match color {
            Color::Light => self.light_king_location = location,
            Color::Dark => self.dark_king_location = location,
        }
    }
}
