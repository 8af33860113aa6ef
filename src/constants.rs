/// Names of the artifacts written into the output directory.
pub mod outputs {
    /// Test-split track ranges, rows `start,end,label,cam`.
    pub const TRACKS_TEST: &str = "x-mars-tracks-test.csv";
    /// Test-split image names, one per line.
    pub const TEST_NAMES: &str = "x-mars-test-name.txt";
    /// Selected query track indices, one per line.
    pub const QUERY_IDX: &str = "x-mars-query-idx.csv";
    /// Train-split track ranges, rows `start,end,label,cam`.
    pub const TRACKS_TRAIN: &str = "x-mars-tracks-train.csv";
    /// Train-split image names, one per line.
    pub const TRAIN_NAMES: &str = "x-mars-train-name.txt";
}

/// Glob patterns for the two dataset layouts, relative to each dataset root.
pub mod patterns {
    /// Market-1501 gallery images.
    pub const MARKET_TEST: &str = "bounding_box_test/*.jpg";
    /// Market-1501 training images.
    pub const MARKET_TRAIN: &str = "bounding_box_train/*.jpg";
    /// MARS test images, one subdirectory per identity.
    pub const MARS_TEST: &str = "bbox_test/*/*.jpg";
    /// MARS training images, one subdirectory per identity.
    pub const MARS_TRAIN: &str = "bbox_train/*/*.jpg";
}

/// Fixed character offsets of the MARS filename scheme.
///
/// A MARS base name reads `LLLLCxTttttFffff.jpg`: a 4-digit label, camera
/// digit after `C`, 4-digit track after `T`, frame after `F`. Distractor
/// images replace the label digits with the literal `00-1`.
pub mod mars_layout {
    /// Width of the leading label field.
    pub const LABEL_LEN: usize = 4;
    /// Literal label field marking the distractor class.
    pub const DISTRACTOR_TOKEN: &str = "00-1";
    /// Offset of the single camera digit.
    pub const CAM_OFFSET: usize = 5;
    /// First byte of the track field.
    pub const TRACK_START: usize = 7;
    /// One past the last byte of the track field.
    pub const TRACK_END: usize = 11;
}

/// Sentinel label assigned to distractor images.
pub const DISTRACTOR_LABEL: crate::types::Label = -1;
