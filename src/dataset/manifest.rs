//! Dataset scan summaries.
//!
//! A scan walks a dataset directory and validates every filename label
//! without decoding any image. The summary serializes to JSON so a scan can
//! be archived next to the dataset it describes.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::notation::{label_from_path, parse_notation};
use crate::dataset::paths::image_paths;

/// One file whose label failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedEntry {
    pub path: PathBuf,
    pub error: String,
}

/// Result of scanning a dataset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total: usize,
    pub valid: usize,
    pub malformed: Vec<MalformedEntry>,
}

/// Scans a dataset directory, parsing every filename label.
///
/// Unlike batch building, a malformed label does not abort the scan; it is
/// recorded in the summary so the bad files can be listed and culled.
pub fn scan_dataset(dir: &Path) -> io::Result<ScanSummary> {
    let paths = image_paths(dir)?;
    let mut summary = ScanSummary {
        total: paths.len(),
        valid: 0,
        malformed: Vec::new(),
    };

    for path in &paths {
        let result = match label_from_path(path) {
            Some(label) => parse_notation(label).map(|_| ()).map_err(|e| e.to_string()),
            None => Err("no label in filename".to_string()),
        };
        match result {
            Ok(()) => summary.valid += 1,
            Err(error) => summary.malformed.push(MalformedEntry {
                path: path.clone(),
                error,
            }),
        }
    }

    Ok(summary)
}
