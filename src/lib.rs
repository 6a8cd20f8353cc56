//! fenprep -- preprocessing utilities for chess-position image datasets.
//!
//! Parses board positions out of dataset filenames, converts between the
//! compact notation string, the dense 8x8 board, and the flat 64x13 one-hot
//! vector, and stacks images and labels into `ndarray` matrices for a
//! training pipeline.

pub mod board;
pub mod codec;
pub mod dataset;
