//! Board representation types.
//!
//! Contains the piece/color types, their notation and code mappings, and the
//! dense 8x8 board grid.

pub mod grid;
pub mod piece;

pub use grid::{Board, BOARD_SIZE, NUM_SQUARES};
pub use piece::{Color, Piece, PieceType, EMPTY_CLASS, NUM_CLASSES};
