use std::io;

use thiserror::Error;

/// Error type for listing, parsing, and output serialization failures.
///
/// The tool is a single-pass batch utility: every variant aborts the run.
/// There is no retry or partial-write recovery.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("filename '{path}' does not match the expected layout: {details}")]
    Filename { path: String, details: String },
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("unreadable directory entry: {0}")]
    Listing(#[from] glob::GlobError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
