//! GameState-to-FEN generator.
//!
//! Emits the board layout and side to move. The castling, en-passant, and
//! clock fields are outside the rule set, so fixed `- - 0 1` placeholders
//! keep the output a well-formed six-field FEN.

use crate::game_state::chess_types::{Color, PieceKind, PieceRecord};
use crate::game_state::game_state::GameState;

pub fn generate_fen(game: &GameState) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let mut empty_run = 0u8;
        for col in 0..8i8 {
            match *game.board.view((row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });
    out.push_str(" - - 0 1");

    out
}

fn piece_to_fen_char(piece: PieceRecord) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => lower.to_ascii_uppercase(),
        Color::Dark => lower,
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_round_trips_with_placeholder_fields() {
        let game = GameState::new_game();
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );
    }

    #[test]
    fn sparse_position_round_trips_through_parse_and_generate() {
        let fen = "4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1";
        let game = GameState::from_fen(fen).expect("FEN parses");
        assert_eq!(game.get_fen(), fen);
    }

    #[test]
    fn generated_fen_reflects_applied_moves() {
        use crate::moves::chess_move::ChessMove;

        let mut game = GameState::new_game();
        let mv = ChessMove::from_board((6, 4), (4, 4), &game.board).expect("e2 is occupied");
        game.make_move(mv);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
    }
}
