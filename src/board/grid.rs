//! Dense board representation.
//!
//! An 8x8 grid of optional pieces, row 0 being the top rank as written in
//! the notation string (black's back rank in the standard orientation).
//! The signed-code view used by the ML pipeline is available through
//! [`Board::codes`] and [`Board::code_at`].

use super::piece::Piece;

/// Squares along one side of the board.
pub const BOARD_SIZE: usize = 8;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A dense chess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns a board with every square empty.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from an 8x8 grid of signed piece codes.
    /// Returns `None` if any code is outside -6..=6.
    pub fn from_codes(codes: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Board> {
        let mut board = Board::empty();
        for (rank, row) in codes.iter().enumerate() {
            for (file, &code) in row.iter().enumerate() {
                if code != 0 {
                    board.squares[rank][file] = Some(Piece::from_code(code)?);
                }
            }
        }
        Some(board)
    }

    /// Returns the signed piece code at a square (0 for empty).
    pub fn code_at(&self, rank: usize, file: usize) -> i8 {
        self.squares[rank][file].map_or(0, Piece::code)
    }

    /// Returns the 8x8 grid of signed piece codes.
    pub fn codes(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                codes[rank][file] = self.code_at(rank, file);
            }
        }
        codes
    }
}
