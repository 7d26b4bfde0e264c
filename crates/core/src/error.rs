//! Error types for checkers-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("no piece on ({row}, {col})")]
    NoPiece { row: usize, col: usize },

    #[error("square ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("cannot lay out {initial_rows} starting rows per side on a {size}x{size} board")]
    InvalidLayout { size: usize, initial_rows: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
