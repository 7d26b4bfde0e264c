//! Turn and selection handling for one game

use tracing::{debug, info};

use crate::board::{Board, MoveMap};
use crate::piece::{Color, Piece, Square};
use crate::snapshot::Snapshot;

/// A game in progress: the board, whose turn it is, and the current selection.
///
/// Every call runs to completion against the board before returning; callers
/// sharing a session between threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    valid_moves: MoveMap,
}

impl GameSession {
    /// Fresh standard game with Red to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Red)
    }

    /// Session over an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
            valid_moves: MoveMap::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The currently selected piece, if any.
    pub fn selected(&self) -> Option<&Piece> {
        let square = self.selected?;
        self.board.get_piece(square.row, square.col).ok().flatten()
    }

    pub fn valid_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    /// Destinations to highlight for the current selection.
    pub fn highlights(&self) -> Vec<Square> {
        self.valid_moves.destinations().collect()
    }

    /// Handles a click on `(row, col)`.
    ///
    /// With a piece selected this first tries to move there. If that fails the
    /// click is treated as a fresh selection. Returns whether the click moved
    /// or selected something.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        if self.selected.is_some() {
            if self.apply_move(row, col) {
                return true;
            }
            self.clear_selection();
        }

        match self.board.get_piece(row, col) {
            Ok(Some(piece)) if piece.color == self.turn => {
                let piece = *piece;
                self.valid_moves = self.board.get_valid_moves(&piece);
                self.selected = Some(piece.square());
                debug!(
                    color = %piece.color,
                    square = %piece.square(),
                    destinations = self.valid_moves.len(),
                    "piece selected"
                );
                true
            }
            _ => false,
        }
    }

    /// Moves the selected piece to `(row, col)` if that is one of its
    /// destinations, removing whatever the move captures.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let Some(piece) = self.selected().copied() else {
            return false;
        };
        if !matches!(self.board.get_piece(row, col), Ok(None)) {
            return false;
        }
        let target = Square::new(row, col);
        let Some(captured) = self.valid_moves.captures(target).map(<[Piece]>::to_vec) else {
            return false;
        };

        if let Err(err) = self.board.move_piece(&piece, row, col) {
            debug!(%err, "move rejected by board");
            return false;
        }
        if !captured.is_empty() {
            self.board.remove(&captured);
        }
        info!(
            color = %piece.color,
            from = %piece.square(),
            to = %target,
            captured = captured.len(),
            "move applied"
        );

        self.switch_turn();
        if let Some(winner) = self.board.winner() {
            info!(%winner, "game over");
        }
        true
    }

    /// Hands the move to the other side and drops the selection.
    pub fn switch_turn(&mut self) {
        self.clear_selection();
        self.turn = self.turn.opponent();
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Starts over from the standard position.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("session reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
