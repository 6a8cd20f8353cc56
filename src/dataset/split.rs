//! Deterministic train/test splitting.

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffles the path list with a seeded RNG and splits it into
/// `(train, test)` at `train_fraction`.
///
/// The same inputs, fraction, and seed always produce the same split.
pub fn train_test_split(
    paths: &[PathBuf],
    train_fraction: f64,
    seed: u64,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let fraction = train_fraction.clamp(0.0, 1.0);
    let mut train: Vec<PathBuf> = paths.to_vec();
    let mut rng = SmallRng::seed_from_u64(seed);
    train.shuffle(&mut rng);

    let cut = ((train.len() as f64) * fraction).round() as usize;
    let test = train.split_off(cut.min(train.len()));
    (train, test)
}
