//! Glob-based enumeration of dataset image files.
//!
//! Inputs are read-only; enumeration order is whatever the glob yields. Every
//! downstream ordering guarantee comes from sorted grouping and per-track
//! filename sorting, never from this module.

use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, warn};

use crate::constants::patterns;
use crate::errors::BuildError;

/// All paths under `root` matching the shell-style `pattern`.
///
/// An empty match is not an error, but it almost always means a wrong dataset
/// root, so it logs a warning.
pub fn matching_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, BuildError> {
    let full_pattern = root.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();
    let mut paths = Vec::new();
    for entry in glob(&full_pattern)? {
        paths.push(entry?);
    }
    if paths.is_empty() {
        warn!(pattern = %full_pattern, "no files matched pattern");
    } else {
        debug!(pattern = %full_pattern, files = paths.len(), "listed dataset files");
    }
    Ok(paths)
}

/// Market-1501 gallery (test) images under `market_dir`.
pub fn market_test_files(market_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    matching_files(market_dir, patterns::MARKET_TEST)
}

/// Market-1501 training images under `market_dir`.
pub fn market_train_files(market_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    matching_files(market_dir, patterns::MARKET_TRAIN)
}

/// MARS test images under `mars_dir` (one identity subdirectory per label).
pub fn mars_test_files(mars_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    matching_files(mars_dir, patterns::MARS_TEST)
}

/// MARS training images under `mars_dir`.
pub fn mars_train_files(mars_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    matching_files(mars_dir, patterns::MARS_TRAIN)
}
