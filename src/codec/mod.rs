//! Conversions between the dataset's board representations.
//!
//! The compact notation string, the dense 8x8 board, and the flat 64x13
//! one-hot vector all describe the same position; these modules convert
//! losslessly between them for well-formed inputs.

pub mod notation;
pub mod onehot;

pub use notation::{encode_notation, label_from_path, parse_notation, NotationError};
pub use onehot::{
    board_to_one_hot, notation_to_one_hot, one_hot_to_board, OneHotError, ONE_HOT_LEN,
};
