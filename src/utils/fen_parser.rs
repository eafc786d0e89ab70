//! FEN-to-GameState parser.
//!
//! Builds a populated mailbox state from a Forsyth-Edwards Notation string.
//! Only the board layout and side-to-move fields are consumed; castling,
//! en-passant, and clock fields are accepted and ignored because the rule
//! set does not model them.

use crate::errors::Errors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> Result<GameState, Errors> {
    let mut parts = fen.split_whitespace();
    let board_part = parts.next().ok_or(Errors::InvalidFENstring)?;
    let side_part = parts.next().ok_or(Errors::InvalidFENstring)?;

    let mut board = Board::default();
    parse_board(board_part, &mut board)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let light_king_location = locate_king(&board, Color::Light)?;
    let dark_king_location = locate_king(&board, Color::Dark)?;

    Ok(GameState {
        board,
        side_to_move,
        light_king_location,
        dark_king_location,
        move_log: Vec::new(),
        checkmate: false,
        stalemate: false,
    })
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), Errors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(Errors::InvalidFENstring);
    }

    // FEN lists rank 8 first, which is row 0 in this engine's numbering.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(Errors::InvalidFENstring);
                }
                col += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(Errors::InvalidFENstring)?;
            if col > 7 {
                return Err(Errors::InvalidFENstring);
            }
            *board.at((row as i8, col)) = Some(piece);
            col += 1;
        }
        if col != 8 {
            return Err(Errors::InvalidFENstring);
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, Errors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(Errors::InvalidFENstring),
    }
}

/// The engine keeps king squares as a derived cache, so a parsed position
/// must hold exactly one king per color.
fn locate_king(board: &Board, color: Color) -> Result<BoardLocation, Errors> {
    let mut found = None;
    for row in 0..8i8 {
        for col in 0..8i8 {
            let is_king = matches!(
                *board.view((row, col)),
                Some(piece) if piece.color == color && piece.kind == PieceKind::King
            );
            if is_king {
                if found.is_some() {
                    return Err(Errors::InvalidFENstring);
                }
                found = Some((row, col));
            }
        }
    }
    found.ok_or(Errors::InvalidFENstring)
}

fn piece_from_fen_char(ch: char) -> Option<PieceRecord> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(PieceRecord { color, kind })
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn parse_starting_fen_populates_the_mailbox() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.light_king_location, (7, 4));
        assert_eq!(game.dark_king_location, (0, 4));

        let light_rook = game.board.view((7, 0)).as_ref().expect("a1 holds a piece");
        assert_eq!(light_rook.color, Color::Light);
        assert_eq!(light_rook.kind, PieceKind::Rook);

        let dark_pawn = game.board.view((1, 3)).as_ref().expect("d7 holds a piece");
        assert_eq!(dark_pawn.color, Color::Dark);
        assert_eq!(dark_pawn.kind, PieceKind::Pawn);

        assert!(game.board.view((4, 4)).is_none());
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        // Too few ranks.
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        // Rank does not sum to eight files.
        assert!(parse_fen("k6/8/8/8/8/8/8/K7 w - - 0 1").is_err());
        // Unknown piece letter.
        assert!(parse_fen("k7/8/8/3x4/8/8/8/K7 w - - 0 1").is_err());
        // Bad side-to-move field.
        assert!(parse_fen("k7/8/8/8/8/8/8/K7 x - - 0 1").is_err());
    }

    #[test]
    fn king_count_invariant_is_enforced() {
        // No dark king.
        assert!(parse_fen("8/8/8/8/8/8/8/K7 w - - 0 1").is_err());
        // Two light kings.
        assert!(parse_fen("k7/8/8/8/8/8/8/KK6 w - - 0 1").is_err());
    }
}
