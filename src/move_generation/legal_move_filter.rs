//! Check detection and legal-move filtering.
//!
//! Candidate moves are speculatively applied with make/undo on the same
//! state; a candidate survives only if it leaves the mover's own king safe.
//! The attack test generates opponent pseudo-legal moves for an explicit
//! attacker color instead of flipping the shared turn flag.

use crate::game_state::chess_types::{BoardLocation, Color};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_all_moves;
use crate::moves::chess_move::ChessMove;

impl GameState {
    /// All pseudo-legal moves for the side to move, without regard to check.
    pub fn get_all_possible_moves(&self) -> Vec<ChessMove> {
        generate_all_moves(&self.board, self.side_to_move)
    }

    /// True iff any pseudo-legal move of `attacker` lands on `target`.
    pub fn square_under_attack(&self, target: BoardLocation, attacker: Color) -> bool {
        generate_all_moves(&self.board, attacker)
            .iter()
            .any(|candidate| candidate.stop == target)
    }

    /// True iff the side to move's king square is attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(
            self.king_location(self.side_to_move),
            self.side_to_move.opposite(),
        )
    }

    /// Filters pseudo-legal candidates down to fully legal moves and
    /// refreshes the checkmate/stalemate flags as a side effect. This is the
    /// single source of truth for whether the game is over; drivers call it
    /// after every applied move.
    pub fn get_valid_moves(&mut self) -> Vec<ChessMove> {
        let mover = self.side_to_move;
        let candidates = self.get_all_possible_moves();
        let mut legal = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            self.make_move(candidate.clone());
            let exposes_own_king =
                self.square_under_attack(self.king_location(mover), mover.opposite());
            self.undo_move();
            if !exposes_own_king {
                legal.push(candidate);
            }
        }

        if legal.is_empty() {
            self.checkmate = self.in_check();
            self.stalemate = !self.checkmate;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        legal
    }
}
