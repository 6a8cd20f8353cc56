//! Dataset preprocessing utilities.
//!
//! File enumeration, batch matrix building, train/test splitting, and
//! scan summaries for a directory of position images.

pub mod batch;
pub mod manifest;
pub mod paths;
pub mod split;

pub use batch::{load_inputs, load_labels, DatasetError, PIXELS_PER_IMAGE};
pub use manifest::{scan_dataset, MalformedEntry, ScanSummary};
pub use paths::image_paths;
pub use split::train_test_split;
