//! Batch matrix building for the training pipeline.
//!
//! Turns a list of dataset files into the two matrices a model consumes:
//! inputs of shape `(count, 480_000)` (400x400 RGB pixels, normalized by
//! 255) and labels of shape `(count, 832)` (one one-hot vector per file,
//! parsed from the filename). The first failure aborts the whole batch; no
//! partial results are returned.

use std::path::{Path, PathBuf};

use ndarray::{aview1, Array2};
use rayon::prelude::*;

use crate::codec::notation::{label_from_path, NotationError};
use crate::codec::onehot::{notation_to_one_hot, ONE_HOT_LEN};

/// Expected image width in pixels.
pub const IMAGE_WIDTH: u32 = 400;

/// Expected image height in pixels.
pub const IMAGE_HEIGHT: u32 = 400;

/// RGB channels per pixel.
pub const IMAGE_CHANNELS: usize = 3;

/// Flattened length of one image: 400 * 400 * 3.
pub const PIXELS_PER_IMAGE: usize =
    (IMAGE_WIDTH as usize) * (IMAGE_HEIGHT as usize) * IMAGE_CHANNELS;

/// Errors that can occur while building batch matrices.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("image {path} is {width}x{height}, expected 400x400")]
    WrongDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("path {path} has no usable label in its filename")]
    MissingLabel { path: PathBuf },

    #[error("bad label in {path}: {source}")]
    BadLabel {
        path: PathBuf,
        source: NotationError,
    },
}

/// Decodes one image into a normalized flat pixel row.
fn load_pixels(path: &Path) -> Result<Vec<f32>, DatasetError> {
    let img = image::open(path).map_err(|source| DatasetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.to_rgb8();
    if rgb.width() != IMAGE_WIDTH || rgb.height() != IMAGE_HEIGHT {
        return Err(DatasetError::WrongDimensions {
            path: path.to_path_buf(),
            width: rgb.width(),
            height: rgb.height(),
        });
    }
    Ok(rgb.into_raw().iter().map(|&b| b as f32 / 255.0).collect())
}

/// Loads and stacks images into an input matrix of shape
/// `(paths.len(), 480_000)`.
///
/// Decoding fans out across a rayon thread pool; row order still follows
/// the input path order.
pub fn load_inputs(paths: &[PathBuf]) -> Result<Array2<f32>, DatasetError> {
    let rows: Vec<Vec<f32>> = paths
        .par_iter()
        .map(|path| load_pixels(path))
        .collect::<Result<_, _>>()?;

    let mut inputs = Array2::zeros((paths.len(), PIXELS_PER_IMAGE));
    for (i, row) in rows.iter().enumerate() {
        inputs.row_mut(i).assign(&aview1(row));
    }
    Ok(inputs)
}

/// Parses filename labels and stacks them into a label matrix of shape
/// `(paths.len(), 832)`.
pub fn load_labels(paths: &[PathBuf]) -> Result<Array2<f32>, DatasetError> {
    let mut labels = Array2::zeros((paths.len(), ONE_HOT_LEN));
    for (i, path) in paths.iter().enumerate() {
        let notation = label_from_path(path).ok_or_else(|| DatasetError::MissingLabel {
            path: path.clone(),
        })?;
        let vector = notation_to_one_hot(notation).map_err(|source| DatasetError::BadLabel {
            path: path.clone(),
            source,
        })?;
        labels.row_mut(i).assign(&aview1(&vector));
    }
    Ok(labels)
}
