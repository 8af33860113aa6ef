//! Label/camera/track grouping of image file lists.
//!
//! Pure data transformation: the partition and the nested grouping reuse the
//! filename extractor for every key and never touch the filesystem.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::errors::BuildError;
use crate::filename;
use crate::types::{CamId, Label, TrackId};

/// Three-level ordered grouping: label, then camera, then track, to files.
///
/// `BTreeMap` keys give ascending numeric traversal order at every level.
/// The innermost `Vec` keeps original enumeration order; files are sorted
/// only at write time, per track.
pub type TrackGroups = BTreeMap<Label, BTreeMap<CamId, BTreeMap<TrackId, Vec<PathBuf>>>>;

/// Route each MARS file to the test or train partition.
///
/// A file goes to test exactly when its label is in `test_labels`; every
/// other file, distractors included, falls to train.
pub fn partition_by_test_labels(
    files: Vec<PathBuf>,
    test_labels: &BTreeSet<Label>,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>), BuildError> {
    let mut test = Vec::new();
    let mut train = Vec::new();
    for file in files {
        let label = filename::mars_label(&file)?;
        if test_labels.contains(&label) {
            test.push(file);
        } else {
            train.push(file);
        }
    }
    Ok((test, train))
}

/// Build the nested label/camera/track grouping for one partition.
pub fn group_by_label_cam_track(files: &[PathBuf]) -> Result<TrackGroups, BuildError> {
    let mut groups = TrackGroups::new();
    for file in files {
        let label = filename::mars_label(file)?;
        let cam = filename::mars_cam(file)?;
        let track = filename::mars_track(file)?;
        groups
            .entry(label)
            .or_default()
            .entry(cam)
            .or_default()
            .entry(track)
            .or_default()
            .push(file.clone());
    }
    Ok(groups)
}

/// Total number of files held by `groups`.
pub fn record_count(groups: &TrackGroups) -> usize {
    groups
        .values()
        .flat_map(|by_cam| by_cam.values())
        .flat_map(|by_track| by_track.values())
        .map(Vec::len)
        .sum()
}
