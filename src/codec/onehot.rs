//! One-hot (dummy-coded) board encoding.
//!
//! Each of the 64 squares expands to a 13-wide one-hot block in row-major
//! square order, giving a flat vector of 832 floats. The class index within
//! a block is the signed piece code + 6, so the class order is
//! `[bK, bQ, bR, bB, bN, bP, empty, wP, wN, wB, wR, wQ, wK]`.

use crate::board::grid::{Board, BOARD_SIZE, NUM_SQUARES};
use crate::board::piece::{Piece, EMPTY_CLASS, NUM_CLASSES};
use crate::codec::notation::{parse_notation, NotationError};

/// Length of a flat one-hot vector: 64 squares x 13 classes.
pub const ONE_HOT_LEN: usize = NUM_SQUARES * NUM_CLASSES;

/// Errors that can occur while decoding a one-hot vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OneHotError {
    #[error("expected a vector of length 832, got {0}")]
    WrongLength(usize),

    #[error("square {square} has {active} active classes, expected exactly 1")]
    InvalidBlock { square: usize, active: usize },
}

/// Encodes a dense board into a flat one-hot vector.
///
/// Exactly one class is active per 13-wide block, so the output always
/// decodes back to the input board.
pub fn board_to_one_hot(board: &Board) -> [f32; ONE_HOT_LEN] {
    let mut vector = [0.0f32; ONE_HOT_LEN];
    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            let square = rank * BOARD_SIZE + file;
            let class = match board.squares[rank][file] {
                Some(piece) => piece.class_index(),
                None => EMPTY_CLASS,
            };
            vector[square * NUM_CLASSES + class] = 1.0;
        }
    }
    vector
}

/// Parses a notation string and encodes it as a flat one-hot vector.
///
/// Going through [`parse_notation`] guarantees the vector covers exactly
/// 64 squares; a string that expands to anything else fails there.
pub fn notation_to_one_hot(s: &str) -> Result<[f32; ONE_HOT_LEN], NotationError> {
    Ok(board_to_one_hot(&parse_notation(s)?))
}

/// Decodes a flat one-hot vector back into a dense board.
///
/// Every 13-wide block must have exactly one active (nonzero) entry; a
/// block with zero or multiple active classes fails with
/// [`OneHotError::InvalidBlock`]. Class index `i` maps to piece code
/// `i - 6`.
pub fn one_hot_to_board(vector: &[f32]) -> Result<Board, OneHotError> {
    if vector.len() != ONE_HOT_LEN {
        return Err(OneHotError::WrongLength(vector.len()));
    }

    let mut board = Board::empty();
    for square in 0..NUM_SQUARES {
        let block = &vector[square * NUM_CLASSES..(square + 1) * NUM_CLASSES];
        let mut active = 0;
        let mut found = None;
        for (class, &value) in block.iter().enumerate() {
            if value != 0.0 {
                active += 1;
                found = Some(class);
            }
        }
        let class = match (active, found) {
            (1, Some(class)) => class,
            _ => return Err(OneHotError::InvalidBlock { square, active }),
        };

        let code = class as i8 - EMPTY_CLASS as i8;
        board.squares[square / BOARD_SIZE][square % BOARD_SIZE] = Piece::from_code(code);
    }

    Ok(board)
}
