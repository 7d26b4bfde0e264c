//! Pieces, sides and board coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides.
///
/// Red starts on the bottom rows and moves toward row 0; White starts on the
/// top rows and moves toward the last row. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::White];

    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Row step of a forward move for this side.
    pub fn forward(self) -> isize {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// Row on which a man of this side is crowned.
    pub fn promotion_row(self, size: usize) -> usize {
        match self {
            Color::Red => 0,
            Color::White => size.saturating_sub(1),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::White => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::White => "white",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A board coordinate. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single piece on the board.
///
/// Pieces are plain values; the board is the only owner and the only thing
/// that changes their position or crowns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    pub fn new(row: usize, col: usize, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            is_king: false,
        }
    }

    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.row = square.row;
        self.col = square.col;
    }

    pub(crate) fn make_king(&mut self) {
        self.is_king = true;
    }

    /// Row steps this piece may search along, forward first for men.
    pub(crate) fn row_steps(&self) -> &'static [isize] {
        match (self.is_king, self.color) {
            (true, _) => &[-1, 1],
            (false, Color::Red) => &[-1],
            (false, Color::White) => &[1],
        }
    }

    /// Single character used by the text renderer.
    pub fn symbol(&self) -> char {
        match (self.color, self.is_king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Color::Red.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Red);
    }

    #[test]
    fn promotion_rows_are_opposite_edges() {
        assert_eq!(Color::Red.promotion_row(8), 0);
        assert_eq!(Color::White.promotion_row(8), 7);
    }

    #[test]
    fn kings_search_both_ways() {
        let mut piece = Piece::new(3, 2, Color::White);
        assert_eq!(piece.row_steps(), &[1]);
        piece.make_king();
        assert_eq!(piece.row_steps(), &[-1, 1]);
        assert_eq!(piece.symbol(), 'W');
    }

    #[test]
    fn squares_order_row_major() {
        assert!(Square::new(1, 7) < Square::new(2, 0));
        assert!(Square::new(2, 0) < Square::new(2, 1));
    }
}
