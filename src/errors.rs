use crate::game_state::chess_types::BoardLocation;

/// Represents all possible error types that can occur in the rules engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds,
    /// The provided FEN string is invalid or could not be parsed.
    InvalidFENstring,
    /// The provided algebraic coordinate is invalid or could not be parsed.
    InvalidAlgebraic,
    /// Attempted to build a move starting from an empty square.
    TryingToMoveNonExistantPiece(BoardLocation),
}
