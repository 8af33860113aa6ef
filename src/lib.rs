#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI definition and the end-to-end build pipeline.
pub mod app;
/// Centralized constants for output names, glob patterns, and filename layout.
pub mod constants;
/// Filename metadata extraction for both dataset naming schemes.
pub mod filename;
/// Label/camera/track grouping of image file lists.
pub mod grouping;
/// Label universes and the derived split-label sets.
pub mod labels;
/// Glob-based enumeration of dataset image files.
pub mod listing;
/// Aggregate per-split summaries used for end-of-run reporting.
pub mod summary;
/// Shared type aliases.
pub mod types;
/// Range-index, name-listing, and query-index serialization.
pub mod writer;

mod errors;

pub use app::{Cli, create_x_mars, run};
pub use errors::BuildError;
pub use grouping::TrackGroups;
pub use labels::DerivedLabels;
pub use summary::SplitSummary;
pub use types::{CamId, Label, TrackId};
