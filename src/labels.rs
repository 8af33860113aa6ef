//! Label universes and the derived train/test label sets.
//!
//! The derived split re-partitions the merged MARS universe, so MARS test and
//! train labels are unioned before intersecting with either Market split.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::errors::BuildError;
use crate::filename;
use crate::types::Label;

/// Unique identity labels across a Market-1501 file list.
///
/// Duplicate files for the same label collapse; ordering follows the set.
pub fn unique_market_labels(files: &[PathBuf]) -> Result<BTreeSet<Label>, BuildError> {
    files
        .iter()
        .map(|path| filename::market_label(path))
        .collect()
}

/// Unique identity labels across a MARS file list.
pub fn unique_mars_labels(files: &[PathBuf]) -> Result<BTreeSet<Label>, BuildError> {
    files.iter().map(|path| filename::mars_label(path)).collect()
}

/// The derived X-MARS split-label sets.
///
/// `test` alone decides routing: a file whose label is in `test` goes to the
/// test split, everything else (including distractors and labels matched by
/// neither Market split) goes to train. `train` is computed for reporting and
/// is intentionally not asserted disjoint from `test`; a label present in
/// both original Market splits appears in both derived sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedLabels {
    /// Market test labels that also occur anywhere in MARS.
    pub test: BTreeSet<Label>,
    /// Market train labels that also occur anywhere in MARS.
    pub train: BTreeSet<Label>,
}

impl DerivedLabels {
    /// Intersect both Market label universes with the merged MARS universe.
    pub fn derive(
        market_test: &BTreeSet<Label>,
        market_train: &BTreeSet<Label>,
        mars_all: &BTreeSet<Label>,
    ) -> Self {
        Self {
            test: market_test.intersection(mars_all).copied().collect(),
            train: market_train.intersection(mars_all).copied().collect(),
        }
    }
}

/// Union of the MARS test and train label universes.
pub fn merged_universe(test: &BTreeSet<Label>, train: &BTreeSet<Label>) -> BTreeSet<Label> {
    test.union(train).copied().collect()
}
