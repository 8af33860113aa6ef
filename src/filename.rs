//! Pure metadata extraction from dataset filenames.
//!
//! Both naming schemes encode metadata at fixed character offsets of the base
//! filename. Parsing is deterministic, regex-free, and fails fast on any name
//! that does not match the expected layout.

use std::path::Path;

use crate::constants::{DISTRACTOR_LABEL, mars_layout};
use crate::errors::BuildError;
use crate::types::{CamId, Label, TrackId};

/// Base filename of `path` as UTF-8.
pub(crate) fn base_name(path: &Path) -> Result<&str, BuildError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| layout_error(path, "missing or non-UTF-8 base name"))
}

fn layout_error(path: &Path, details: impl Into<String>) -> BuildError {
    BuildError::Filename {
        path: path.display().to_string(),
        details: details.into(),
    }
}

/// Identity label of a Market-1501 image: the integer before the first `_`.
///
/// Example: `0001_c1s1_001051_00.jpg` => `1`. Market distractors use a plain
/// `-1` prefix, which parses directly.
pub fn market_label(path: &Path) -> Result<Label, BuildError> {
    let name = base_name(path)?;
    let field = match name.split_once('_') {
        Some((prefix, _)) => prefix,
        None => name,
    };
    field.parse::<Label>().map_err(|err| {
        layout_error(path, format!("label field '{field}' is not an integer: {err}"))
    })
}

/// Identity label of a MARS image: the first four characters as integer.
///
/// The literal field `00-1` marks the distractor class and maps to `-1`
/// instead of failing integer parsing.
pub fn mars_label(path: &Path) -> Result<Label, BuildError> {
    let name = base_name(path)?;
    let field = name
        .get(..mars_layout::LABEL_LEN)
        .ok_or_else(|| layout_error(path, "shorter than the label field"))?;
    if field == mars_layout::DISTRACTOR_TOKEN {
        return Ok(DISTRACTOR_LABEL);
    }
    field.parse::<Label>().map_err(|err| {
        layout_error(path, format!("label field '{field}' is not an integer: {err}"))
    })
}

/// Camera id of a MARS image: the single digit following `C`.
pub fn mars_cam(path: &Path) -> Result<CamId, BuildError> {
    let name = base_name(path)?;
    let field = name
        .get(mars_layout::CAM_OFFSET..mars_layout::CAM_OFFSET + 1)
        .ok_or_else(|| layout_error(path, "shorter than the camera field"))?;
    field.parse::<CamId>().map_err(|err| {
        layout_error(path, format!("camera field '{field}' is not an integer: {err}"))
    })
}

/// Track id of a MARS image: the four digits following `T`.
pub fn mars_track(path: &Path) -> Result<TrackId, BuildError> {
    let name = base_name(path)?;
    let field = name
        .get(mars_layout::TRACK_START..mars_layout::TRACK_END)
        .ok_or_else(|| layout_error(path, "shorter than the track field"))?;
    field.parse::<TrackId>().map_err(|err| {
        layout_error(path, format!("track field '{field}' is not an integer: {err}"))
    })
}
