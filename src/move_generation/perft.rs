//! Legal-move tree walker for validation and benchmarking.
//!
//! Counts leaf nodes of the legal-move tree by repeated make/undo cycles on a
//! single state. Castling, en-passant, and underpromotion are outside the
//! rule set, which first diverges from the standard reference counts beyond
//! depth 4 of the starting position.

use crate::game_state::game_state::GameState;

pub fn perft(game: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let legal = game.get_valid_moves();
    if depth == 1 {
        return legal.len() as u64;
    }

    let mut nodes = 0;
    for mv in legal {
        game.make_move(mv);
        nodes += perft(game, depth - 1);
        game.undo_move();
    }
    nodes
}
