//! Checkers Core Library
//!
//! Board state, move generation with capture chains, and turn handling for
//! standard 8x8 checkers.

pub mod board;
pub mod error;
pub mod piece;
pub mod session;
pub mod snapshot;

pub use board::{Board, Cell, MoveMap};
pub use error::{Error, Result};
pub use piece::{Color, Piece, Square};
pub use session::GameSession;
pub use snapshot::{PieceView, Snapshot};

/// Basic position information for the side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInfo {
    pub piece_count: usize,
    pub movable_pieces: usize,
    pub move_count: usize,
    pub side_to_move: Color,
    pub captures_available: bool,
}

/// Summarizes what the side to move can do
pub fn analyze_position(session: &GameSession) -> PositionInfo {
    let board = session.board();
    let side_to_move = session.turn();

    let mut movable_pieces = 0;
    let mut move_count = 0;
    let mut captures_available = false;
    for piece in board.pieces().filter(|p| p.color == side_to_move) {
        let moves = board.get_valid_moves(piece);
        if !moves.is_empty() {
            movable_pieces += 1;
            move_count += moves.len();
            captures_available |= moves.has_captures();
        }
    }

    PositionInfo {
        piece_count: board.pieces().count(),
        movable_pieces,
        move_count,
        side_to_move,
        captures_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let info = analyze_position(&GameSession::new());

        assert_eq!(info.piece_count, 24);
        assert_eq!(info.side_to_move, Color::Red);
        // only the front row can move: three pieces with two steps, one on the edge
        assert_eq!(info.movable_pieces, 4);
        assert_eq!(info.move_count, 7);
        assert!(!info.captures_available);
    }
}
