//! Read-only views of a session for renderers

use serde::Serialize;

use crate::piece::{Color, Piece, Square};
use crate::session::GameSession;

/// One live piece as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub is_king: bool,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        Self {
            row: piece.row,
            col: piece.col,
            color: piece.color,
            is_king: piece.is_king,
        }
    }
}

/// Everything needed to draw a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub size: usize,
    pub turn: Color,
    pub selected: Option<Square>,
    pub highlights: Vec<Square>,
    pub pieces: Vec<PieceView>,
    pub red_left: usize,
    pub white_left: usize,
    pub red_kings: usize,
    pub white_kings: usize,
    pub winner: Option<Color>,
}

impl Snapshot {
    pub fn capture(session: &GameSession) -> Self {
        let board = session.board();
        Self {
            size: board.size(),
            turn: session.turn(),
            selected: session.selected().map(Piece::square),
            highlights: session.highlights(),
            pieces: board.pieces().map(PieceView::from).collect(),
            red_left: board.pieces_left(Color::Red),
            white_left: board.pieces_left(Color::White),
            red_kings: board.kings(Color::Red),
            white_kings: board.kings(Color::White),
            winner: session.winner(),
        }
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Option<&PieceView> {
        self.pieces.iter().find(|p| p.row == row && p.col == col)
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlights.contains(&Square::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_fresh_game() {
        let snapshot = GameSession::new().snapshot();

        assert_eq!(snapshot.size, 8);
        assert_eq!(snapshot.turn, Color::Red);
        assert_eq!(snapshot.pieces.len(), 24);
        assert_eq!(snapshot.red_left, 12);
        assert_eq!(snapshot.white_left, 12);
        assert!(snapshot.highlights.is_empty());
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn test_snapshot_tracks_selection() {
        let mut session = GameSession::new();
        session.select(5, 2);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.selected, Some(Square::new(5, 2)));
        assert!(snapshot.is_highlighted(4, 1));
        assert!(snapshot.is_highlighted(4, 3));
        assert!(!snapshot.is_highlighted(5, 2));
        assert_eq!(snapshot.piece_at(5, 2).map(|p| p.color), Some(Color::Red));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = GameSession::new();
        session.select(5, 0);
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["turn"], "red");
        assert_eq!(json["selected"]["row"], 5);
        assert_eq!(json["highlights"][0]["col"], 1);
        assert_eq!(json["pieces"][0]["color"], "white");
        assert_eq!(json["pieces"][0]["is_king"], false);
        assert!(json["winner"].is_null());
    }
}
