//! Dataset file enumeration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of the dataset's image files.
pub const IMAGE_EXTENSION: &str = "jpeg";

/// Lists the `.jpeg` files directly inside a dataset directory, sorted by
/// path so batch row order is deterministic across runs.
pub fn image_paths(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map_or(false, |ext| ext == IMAGE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
