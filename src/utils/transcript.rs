//! Plain-text game transcript export.
//!
//! Serializes the move log to a bracketed-header document with coordinate
//! movetext ("e2 -> e4"), suitable for logs and debugging dumps. The initial
//! position is recovered by rewinding a clone of the state through its own
//! move log.

use chrono::Local;

use crate::errors::Errors;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

pub fn write_transcript(game: &GameState, event: &str) -> Result<String, Errors> {
    let mut rewound = game.clone();
    while !rewound.move_log.is_empty() {
        rewound.undo_move();
    }

    let result = result_token(game);

    let mut out = String::new();
    out.push_str(&format!("[Event \"{event}\"]\n"));
    out.push_str("[Site \"Local\"]\n");
    out.push_str(&format!("[Date \"{}\"]\n", Local::now().format("%Y.%m.%d")));
    out.push_str(&format!("[Result \"{result}\"]\n"));

    let initial_fen = rewound.get_fen();
    if initial_fen != GameState::new_game().get_fen() {
        out.push_str("[SetUp \"1\"]\n");
        out.push_str(&format!("[FEN \"{initial_fen}\"]\n"));
    }
    out.push('\n');

    let mut movetext = Vec::with_capacity(game.move_log.len() + 1);
    for (ply, mv) in game.move_log.iter().enumerate() {
        let notation = mv.to_chess_notation()?;
        if ply % 2 == 0 {
            movetext.push(format!("{}. {}", ply / 2 + 1, notation));
        } else {
            movetext.push(notation);
        }
    }
    movetext.push(result.to_owned());
    out.push_str(&movetext.join(" "));
    out.push('\n');

    Ok(out)
}

/// The terminal flags are only current right after `get_valid_moves`, so an
/// in-progress game exports as "*".
fn result_token(game: &GameState) -> &'static str {
    if game.checkmate {
        match game.side_to_move {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        }
    } else if game.stalemate {
        "1/2-1/2"
    } else {
        "*"
    }
}
