//! Notation string encoding and decoding.
//!
//! The dataset encodes each position in its filename using the board field
//! of FEN with `-` as the rank separator: eight rank segments, top rank
//! first, piece letters for occupied squares and digits for runs of empty
//! squares. `rnbqkbnr-pppppppp-8-8-8-8-PPPPPPPP-RNBQKBNR` is the starting
//! position.

use std::path::Path;

use crate::board::grid::{Board, BOARD_SIZE};
use crate::board::piece::Piece;

/// Character separating rank segments in a notation string.
pub const RANK_SEPARATOR: char = '-';

/// Upper bound on a notation string's length: 64 squares + 7 separators.
const NUM_NOTATION_CHARS_MAX: usize = 71;

/// Errors that can occur while parsing a notation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 8 ranks separated by '-', got {0}")]
    WrongRankCount(usize),

    #[error("rank {index} expands to {width} squares, expected 8")]
    MalformedRank { index: usize, width: usize },

    #[error("unrecognized character '{ch}' in rank {index}")]
    InvalidCharacter { index: usize, ch: char },
}

/// Parses a notation string into a dense board.
///
/// Each rank segment must expand to exactly 8 squares; a digit `d` expands
/// to `d` consecutive empty squares. Parsing fails fast on the first
/// malformed rank or unrecognized character, with no partial recovery.
pub fn parse_notation(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.split(RANK_SEPARATOR).collect();
    if ranks.len() != BOARD_SIZE {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (index, rank) in ranks.iter().enumerate() {
        let mut row: Vec<Option<Piece>> = Vec::with_capacity(BOARD_SIZE);
        for ch in rank.chars() {
            if let Some(piece) = Piece::from_notation_char(ch) {
                row.push(Some(piece));
            } else if let Some(d) = ch.to_digit(10) {
                row.extend(std::iter::repeat(None).take(d as usize));
            } else {
                return Err(NotationError::InvalidCharacter { index, ch });
            }
        }
        if row.len() != BOARD_SIZE {
            return Err(NotationError::MalformedRank {
                index,
                width: row.len(),
            });
        }
        board.squares[index].copy_from_slice(&row);
    }

    Ok(board)
}

/// Encodes a dense board into its canonical notation string.
///
/// Runs of empty squares collapse into a single digit, so the output is the
/// unique shortest form and `parse_notation(&encode_notation(&b))` returns
/// `b` for every board.
pub fn encode_notation(board: &Board) -> String {
    let mut result = String::with_capacity(NUM_NOTATION_CHARS_MAX);
    for (index, rank) in board.squares.iter().enumerate() {
        if index > 0 {
            result.push(RANK_SEPARATOR);
        }
        let mut empty_run = 0u32;
        for square in rank {
            match square {
                Some(piece) => {
                    if empty_run > 0 {
                        // empty_run <= 8, always a single digit
                        result.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                        empty_run = 0;
                    }
                    result.push(piece.notation_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            result.push(char::from_digit(empty_run, 10).unwrap_or('0'));
        }
    }
    result
}

/// Extracts the notation string from an image path: the final path segment
/// minus its extension. No content validation is performed.
pub fn label_from_path(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The standard starting position in dataset notation.
    const STARTING: &str = "rnbqkbnr-pppppppp-8-8-8-8-PPPPPPPP-RNBQKBNR";

    #[test]
    fn parse_empty_board() {
        let board = parse_notation("8-8-8-8-8-8-8-8").expect("failed to parse empty board");
        assert_eq!(board.codes(), [[0i8; 8]; 8]);
    }

    #[test]
    fn parse_starting_position() {
        let board = parse_notation(STARTING).expect("failed to parse starting position");
        let codes = board.codes();
        assert_eq!(codes[0], [-4, -2, -3, -5, -6, -3, -2, -4]);
        assert_eq!(codes[1], [-1; 8]);
        assert_eq!(codes[6], [1; 8]);
        assert_eq!(codes[7], [4, 2, 3, 5, 6, 3, 2, 4]);
        for rank in 2..6 {
            assert_eq!(codes[rank], [0; 8]);
        }
    }

    #[test]
    fn parse_mixed_rank() {
        let board = parse_notation("8-8-8-2q4N-8-8-8-8").unwrap();
        let codes = board.codes();
        assert_eq!(codes[3], [0, 0, -5, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn short_rank_is_malformed() {
        let err = parse_notation("rnbqkbnr-ppppppp-8-8-8-8-PPPPPPPP-RNBQKBNR").unwrap_err();
        assert_eq!(
            err,
            NotationError::MalformedRank { index: 1, width: 7 }
        );
    }

    #[test]
    fn digit_overflow_is_malformed() {
        let err = parse_notation("9-8-8-8-8-8-8-8").unwrap_err();
        assert_eq!(
            err,
            NotationError::MalformedRank { index: 0, width: 9 }
        );
        let err = parse_notation("p8-8-8-8-8-8-8-8").unwrap_err();
        assert_eq!(
            err,
            NotationError::MalformedRank { index: 0, width: 9 }
        );
    }

    #[test]
    fn wrong_rank_count_is_rejected() {
        let err = parse_notation("8-8-8-8-8-8-8").unwrap_err();
        assert_eq!(err, NotationError::WrongRankCount(7));
        let err = parse_notation("8-8-8-8-8-8-8-8-8").unwrap_err();
        assert_eq!(err, NotationError::WrongRankCount(9));
    }

    #[test]
    fn unrecognized_character_is_rejected() {
        let err = parse_notation("8-8-8-3x4-8-8-8-8").unwrap_err();
        assert_eq!(err, NotationError::InvalidCharacter { index: 3, ch: 'x' });
    }

    #[test]
    fn encode_roundtrip() {
        for s in [
            "8-8-8-8-8-8-8-8",
            STARTING,
            "1b1B1Q2-8-2k5-8-8-4K3-8-7q",
            "R6R-8-8-8-8-8-8-r6r",
        ] {
            let board = parse_notation(s).unwrap();
            assert_eq!(encode_notation(&board), s);
        }
    }

    #[test]
    fn label_from_path_strips_directory_and_extension() {
        let path = Path::new("/data/train/1b1B1Q2-8-2k5-8-8-4K3-8-7q.jpeg");
        assert_eq!(label_from_path(path), Some("1b1B1Q2-8-2k5-8-8-4K3-8-7q"));
        assert_eq!(label_from_path(Path::new("8-8-8-8-8-8-8-8.jpeg")), Some("8-8-8-8-8-8-8-8"));
    }
}
