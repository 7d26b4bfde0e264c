//! Move generation: single steps and capture chains

use std::collections::btree_map::{self, BTreeMap};

use tracing::debug;

use super::{Board, Cell};
use crate::piece::{Color, Piece, Square};

/// How far past the anchor row a single scan may look: the adjacent square
/// plus the landing square of one jump.
const SCAN_ROWS: isize = 3;

/// Destinations reachable by one piece, each with the pieces it captures.
///
/// Capture lists are in jump order. Destinations iterate row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMap {
    moves: BTreeMap<Square, Vec<Piece>>,
}

impl MoveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn contains(&self, square: Square) -> bool {
        self.moves.contains_key(&square)
    }

    /// Pieces captured by moving to `square`, if it is a destination.
    pub fn captures(&self, square: Square) -> Option<&[Piece]> {
        self.moves.get(&square).map(Vec::as_slice)
    }

    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Square, Vec<Piece>> {
        self.moves.iter()
    }

    /// True when any destination captures something.
    pub fn has_captures(&self) -> bool {
        self.moves.values().any(|captured| !captured.is_empty())
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    fn insert(&mut self, square: Square, captured: Vec<Piece>) {
        self.moves.insert(square, captured);
    }

    /// Merges `other` into `self`; on a shared destination `other` wins.
    fn merge(&mut self, other: MoveMap) {
        self.moves.extend(other.moves);
    }
}

impl<'a> IntoIterator for &'a MoveMap {
    type Item = (&'a Square, &'a Vec<Piece>);
    type IntoIter = btree_map::Iter<'a, Square, Vec<Piece>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One diagonal scan: where it starts and which way it walks.
#[derive(Debug, Clone, Copy)]
struct Line {
    row: isize,
    stop: isize,
    row_step: isize,
    col: isize,
    col_step: isize,
}

impl Board {
    /// Every legal destination for `piece`, with the pieces each one captures.
    ///
    /// Men search forward only, kings both ways. A jump that lands next to
    /// another capturable piece keeps going in the same row direction, so the
    /// map holds every intermediate landing square of a chain as well as the
    /// final one.
    pub fn get_valid_moves(&self, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.row as isize;
        let col = piece.col as isize;

        for &row_step in piece.row_steps() {
            let stop = self.scan_stop(row, row_step);
            for col_step in [-1, 1] {
                let line = Line {
                    row: row + row_step,
                    stop,
                    row_step,
                    col: col + col_step,
                    col_step,
                };
                moves.merge(self.traverse(line, piece.color, &[]));
            }
        }

        debug!(
            square = %piece.square(),
            destinations = moves.len(),
            captures = moves.has_captures(),
            "generated moves"
        );
        moves
    }

    /// Exclusive stop row for a scan anchored at `row`.
    fn scan_stop(&self, row: isize, row_step: isize) -> isize {
        let size = self.size as isize;
        (row + SCAN_ROWS * row_step).clamp(-1, size)
    }

    fn traverse(&self, line: Line, color: Color, skipped: &[Piece]) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut last: Option<Piece> = None;
        let Line {
            mut row,
            stop,
            row_step,
            mut col,
            col_step,
        } = line;

        while row != stop {
            let Some(cell) = self.cell_at(row, col) else {
                break;
            };

            match cell {
                Cell::Empty => {
                    let square = Square::new(row as usize, col as usize);
                    match last {
                        None if skipped.is_empty() => moves.insert(square, Vec::new()),
                        None => {}
                        Some(captured) => {
                            let mut chain = Vec::with_capacity(skipped.len() + 1);
                            chain.extend_from_slice(skipped);
                            chain.push(captured);
                            moves.insert(square, chain.clone());

                            let stop = self.scan_stop(row, row_step);
                            for next_step in [-1, 1] {
                                let next = Line {
                                    row: row + row_step,
                                    stop,
                                    row_step,
                                    col: col + next_step,
                                    col_step: next_step,
                                };
                                moves.merge(self.traverse(next, color, &chain));
                            }
                        }
                    }
                    break;
                }
                Cell::Occupied(other) if other.color == color => break,
                Cell::Occupied(other) => {
                    if last.is_some() || skipped.contains(other) {
                        break;
                    }
                    last = Some(*other);
                }
            }

            row += row_step;
            col += col_step;
        }

        moves
    }
}
