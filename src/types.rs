/// Integer identity label shared by both naming schemes.
/// Examples: `1` from `0001C1T0001F001.jpg`, `-1` for the distractor class
pub type Label = i32;
/// Camera identifier parsed from a MARS filename.
/// Example: `3` from `0042C3T0007F0051.jpg`
pub type CamId = u32;
/// Track (tracklet) identifier parsed from a MARS filename.
/// Example: `7` from `0042C3T0007F0051.jpg`
pub type TrackId = u32;
