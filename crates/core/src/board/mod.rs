//! Board state: grid, piece counts and mutation

mod moves;

pub use moves::MoveMap;

use std::fmt;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::piece::{Color, Piece, Square};

/// Side length of a standard checkers board.
pub const STANDARD_SIZE: usize = 8;

/// Rows each side fills at the start of a standard game.
pub const STANDARD_ROWS: usize = 3;

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` cells.
    cells: Vec<Cell>,
    left: [usize; 2],
    kings: [usize; 2],
}

impl Board {
    /// Standard 8x8 starting position.
    pub fn new() -> Self {
        Self::layout(STANDARD_SIZE, STANDARD_ROWS)
    }

    /// Starting position with `initial_rows` rows of pieces per side.
    ///
    /// White fills the first rows and Red the last ones, on the squares where
    /// `col % 2 == (row + 1) % 2`.
    pub fn create(size: usize, initial_rows: usize) -> Result<Self> {
        if size == 0 || initial_rows * 2 > size {
            return Err(Error::InvalidLayout { size, initial_rows });
        }
        Ok(Self::layout(size, initial_rows))
    }

    /// Board with no pieces on it.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            left: [0; 2],
            kings: [0; 2],
        }
    }

    fn layout(size: usize, initial_rows: usize) -> Self {
        let mut board = Self::empty(size);
        for row in 0..size {
            let color = if row < initial_rows {
                Color::White
            } else if row >= size - initial_rows {
                Color::Red
            } else {
                continue;
            };
            for col in (0..size).filter(|col| col % 2 == (row + 1) % 2) {
                board.cells[row * size + col] = Cell::Occupied(Piece::new(row, col, color));
                board.left[color.index()] += 1;
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    /// Cell lookup for signed coordinates; `None` off the board.
    pub(crate) fn cell_at(&self, row: isize, col: isize) -> Option<&Cell> {
        let size = self.size as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            self.cells.get((row * size + col) as usize)
        } else {
            None
        }
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Result<Option<&Piece>> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].piece())
    }

    /// Puts a new piece on an empty square.
    pub fn place(&mut self, row: usize, col: usize, color: Color, is_king: bool) -> Result<Piece> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(Error::Occupied { row, col });
        }

        let mut piece = Piece::new(row, col, color);
        if is_king {
            piece.make_king();
            self.kings[color.index()] += 1;
        }
        self.cells[idx] = Cell::Occupied(piece);
        self.left[color.index()] += 1;
        Ok(piece)
    }

    /// Relocates `piece` to `(row, col)` and crowns it on its promotion row.
    ///
    /// Legality is not checked here; destinations come from
    /// [`Board::get_valid_moves`].
    pub fn move_piece(&mut self, piece: &Piece, row: usize, col: usize) -> Result<Piece> {
        let from = self.index(piece.row, piece.col)?;
        let to = self.index(row, col)?;
        if self.cells[from].is_empty() {
            return Err(Error::NoPiece {
                row: piece.row,
                col: piece.col,
            });
        }

        self.cells.swap(from, to);

        let size = self.size;
        let Cell::Occupied(moved) = &mut self.cells[to] else {
            return Err(Error::NoPiece { row, col });
        };
        moved.set_square(Square::new(row, col));
        debug!(color = %moved.color, from = %piece.square(), to = %moved.square(), "piece moved");

        if !moved.is_king && row == moved.color.promotion_row(size) {
            moved.make_king();
            self.kings[moved.color.index()] += 1;
            info!(color = %moved.color, square = %moved.square(), "piece crowned");
        }

        Ok(*moved)
    }

    /// Takes captured pieces off the board.
    ///
    /// Only live counts go down; the king tally keeps counting captured kings.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            let Ok(idx) = self.index(piece.row, piece.col) else {
                continue;
            };
            if let Cell::Occupied(captured) = std::mem::take(&mut self.cells[idx]) {
                self.left[captured.color.index()] -= 1;
                debug!(color = %captured.color, square = %captured.square(), "piece captured");
            }
        }
    }

    /// The side whose opponent has no pieces left, if any.
    pub fn winner(&self) -> Option<Color> {
        if self.pieces_left(Color::Red) == 0 {
            Some(Color::White)
        } else if self.pieces_left(Color::White) == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    pub fn pieces_left(&self, color: Color) -> usize {
        self.left[color.index()]
    }

    pub fn kings(&self, color: Color) -> usize {
        self.kings[color.index()]
    }

    /// Live pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().filter_map(Cell::piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.size.max(1)).enumerate() {
            write!(f, "{:>2} ", row)?;
            for cell in cells {
                let symbol = cell.piece().map(Piece::symbol).unwrap_or('.');
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::new();

        assert_eq!(board.size(), 8);
        assert_eq!(board.pieces_left(Color::Red), 12);
        assert_eq!(board.pieces_left(Color::White), 12);
        assert_eq!(board.kings(Color::Red), 0);
        assert_eq!(board.kings(Color::White), 0);
        assert_eq!(board.winner(), None);

        for row in 0..8 {
            for col in 0..8 {
                let piece = board.get_piece(row, col).unwrap();
                let dark = col % 2 == (row + 1) % 2;
                match piece {
                    Some(p) if row < 3 => {
                        assert!(dark);
                        assert_eq!(p.color, Color::White);
                    }
                    Some(p) if row > 4 => {
                        assert!(dark);
                        assert_eq!(p.color, Color::Red);
                    }
                    Some(p) => panic!("unexpected piece {:?} in the middle rows", p),
                    None => assert!(!dark || (3..=4).contains(&row)),
                }
            }
        }
    }

    #[test]
    fn test_create_rejects_impossible_layouts() {
        assert_eq!(
            Board::create(6, 4),
            Err(Error::InvalidLayout { size: 6, initial_rows: 4 })
        );
        assert!(Board::create(0, 0).is_err());

        let small = Board::create(6, 2).unwrap();
        assert_eq!(small.pieces_left(Color::Red), 6);
        assert_eq!(small.pieces_left(Color::White), 6);
    }

    #[test]
    fn test_get_piece_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.get_piece(8, 0),
            Err(Error::OutOfBounds { row: 8, col: 0 })
        );
        assert!(board.get_piece(0, 8).is_err());
    }

    #[test]
    fn test_place_updates_counts() {
        let mut board = Board::empty(8);
        board.place(3, 2, Color::Red, false).unwrap();
        board.place(4, 5, Color::White, true).unwrap();

        assert_eq!(board.pieces_left(Color::Red), 1);
        assert_eq!(board.pieces_left(Color::White), 1);
        assert_eq!(board.kings(Color::White), 1);
        assert_eq!(
            board.place(3, 2, Color::White, false),
            Err(Error::Occupied { row: 3, col: 2 })
        );
    }

    #[test]
    fn test_move_updates_grid_and_piece() {
        let mut board = Board::new();
        let piece = *board.get_piece(5, 0).unwrap().unwrap();

        let moved = board.move_piece(&piece, 4, 1).unwrap();

        assert_eq!(moved.square(), Square::new(4, 1));
        assert!(board.get_piece(5, 0).unwrap().is_none());
        assert_eq!(board.get_piece(4, 1).unwrap(), Some(&moved));
        assert_eq!(board.pieces().count(), 24);
    }

    #[test]
    fn test_move_from_empty_square_fails() {
        let mut board = Board::empty(8);
        let ghost = Piece::new(4, 1, Color::Red);
        assert_eq!(
            board.move_piece(&ghost, 3, 0),
            Err(Error::NoPiece { row: 4, col: 1 })
        );
    }

    #[test]
    fn test_promotion_counts_once() {
        let mut board = Board::empty(8);
        let piece = board.place(1, 2, Color::Red, false).unwrap();
        board.place(6, 1, Color::White, false).unwrap();

        let crowned = board.move_piece(&piece, 0, 1).unwrap();
        assert!(crowned.is_king);
        assert_eq!(board.kings(Color::Red), 1);

        // a king stepping off and back onto the edge stays counted once
        let stepped = board.move_piece(&crowned, 1, 2).unwrap();
        let back = board.move_piece(&stepped, 0, 3).unwrap();
        assert!(back.is_king);
        assert_eq!(board.kings(Color::Red), 1);
    }

    #[test]
    fn test_white_promotes_on_last_row() {
        let mut board = Board::empty(8);
        let piece = board.place(6, 1, Color::White, false).unwrap();

        let crowned = board.move_piece(&piece, 7, 0).unwrap();
        assert!(crowned.is_king);
        assert_eq!(board.kings(Color::White), 1);
        assert_eq!(board.kings(Color::Red), 0);
    }

    #[test]
    fn test_remove_keeps_king_tally() {
        let mut board = Board::empty(8);
        let king = board.place(3, 4, Color::White, true).unwrap();
        let man = board.place(2, 3, Color::White, false).unwrap();
        board.place(7, 0, Color::Red, false).unwrap();

        board.remove(&[king, man]);

        assert_eq!(board.pieces_left(Color::White), 0);
        assert_eq!(board.kings(Color::White), 1);
        assert!(board.get_piece(3, 4).unwrap().is_none());
        assert_eq!(board.winner(), Some(Color::Red));
    }

    #[test]
    fn test_remove_skips_empty_squares() {
        let mut board = Board::empty(8);
        let piece = board.place(3, 4, Color::White, false).unwrap();
        board.remove(&[piece]);
        board.remove(&[piece]);
        assert_eq!(board.pieces_left(Color::White), 0);
    }

    #[test]
    fn test_winner_tracks_both_sides() {
        let mut board = Board::empty(8);
        let red = board.place(5, 0, Color::Red, false).unwrap();
        board.place(2, 1, Color::White, false).unwrap();
        assert_eq!(board.winner(), None);

        board.remove(&[red]);
        assert_eq!(board.winner(), Some(Color::White));
    }

    #[test]
    fn test_display_draws_symbols() {
        let mut board = Board::empty(3);
        board.place(0, 1, Color::White, false).unwrap();
        board.place(2, 1, Color::Red, true).unwrap();

        let text = board.to_string();
        assert_eq!(text, "    0 1 2\n 0  . w .\n 1  . . .\n 2  . R .\n");
    }
}
