//! Range-index, name-listing, and query-index serialization.
//!
//! One writing pass per split walks the grouping in sorted order and assigns
//! contiguous 1-based index ranges from a running cursor. A mid-write failure
//! propagates immediately and leaves truncated files; the tool never resumes
//! a partial run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::constants::outputs;
use crate::errors::BuildError;
use crate::filename;
use crate::grouping::TrackGroups;
use crate::types::{CamId, Label};

/// Running 1-based counters for one split's writing pass.
///
/// Both counters are cumulative across the whole split and never reset
/// between labels or cameras.
#[derive(Clone, Copy, Debug)]
struct RangeCursor {
    next_file: u64,
    next_track: u64,
}

impl RangeCursor {
    fn new() -> Self {
        Self {
            next_file: 1,
            next_track: 1,
        }
    }
}

/// Write the three test-split artifacts into `output_dir`.
///
/// `rng` drives the query-track selection; pass a seeded generator for
/// reproducible output.
pub fn write_test_split<R: Rng>(
    groups: &TrackGroups,
    output_dir: &Path,
    rng: &mut R,
) -> Result<(), BuildError> {
    let mut tracks = csv::Writer::from_path(output_dir.join(outputs::TRACKS_TEST))?;
    let mut names = BufWriter::new(File::create(output_dir.join(outputs::TEST_NAMES))?);
    let mut queries = csv::Writer::from_path(output_dir.join(outputs::QUERY_IDX))?;

    let mut cursor = RangeCursor::new();
    for (label, by_cam) in groups {
        for (cam, by_track) in by_cam {
            for files in by_track.values() {
                write_track_block(&mut tracks, &mut names, &mut cursor, *label, *cam, files)?;
            }
            // One query attempt per camera iteration: a label above the
            // distractor/junk classes that spans more than one camera gets
            // one random track out of this camera's track range.
            if *label > 0 && by_cam.len() > 1 {
                let query_idx = cursor.next_track + rng.random_range(0..by_track.len() as u64);
                queries.write_record([query_idx.to_string()])?;
            }
            cursor.next_track += by_track.len() as u64;
        }
    }

    tracks.flush()?;
    names.flush()?;
    queries.flush()?;
    Ok(())
}

/// Write the two train-split artifacts into `output_dir`.
pub fn write_train_split(groups: &TrackGroups, output_dir: &Path) -> Result<(), BuildError> {
    let mut tracks = csv::Writer::from_path(output_dir.join(outputs::TRACKS_TRAIN))?;
    let mut names = BufWriter::new(File::create(output_dir.join(outputs::TRAIN_NAMES))?);

    let mut cursor = RangeCursor::new();
    for (label, by_cam) in groups {
        for (cam, by_track) in by_cam {
            for files in by_track.values() {
                write_track_block(&mut tracks, &mut names, &mut cursor, *label, *cam, files)?;
            }
            cursor.next_track += by_track.len() as u64;
        }
    }

    tracks.flush()?;
    names.flush()?;
    Ok(())
}

/// Emit one track's CSV row and its block of name lines.
///
/// The range is inclusive and spans exactly this track's files; names are
/// written filename-sorted so the Nth block of lines matches the Nth CSV row.
fn write_track_block<W: Write>(
    tracks: &mut csv::Writer<File>,
    names: &mut W,
    cursor: &mut RangeCursor,
    label: Label,
    cam: CamId,
    files: &[PathBuf],
) -> Result<(), BuildError> {
    let start = cursor.next_file;
    cursor.next_file += files.len() as u64;
    let end = cursor.next_file - 1;
    tracks.write_record([
        start.to_string(),
        end.to_string(),
        label.to_string(),
        cam.to_string(),
    ])?;

    let mut sorted = files.to_vec();
    sorted.sort();
    for file in &sorted {
        writeln!(names, "{}", filename::base_name(file)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by_label_cam_track;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::tempdir;

    fn groups_for(names: &[&str]) -> TrackGroups {
        let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        group_by_label_cam_track(&files).unwrap()
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn single_track_emits_one_inclusive_range() {
        let temp = tempdir().unwrap();
        let names: Vec<String> = (1..=7)
            .map(|frame| format!("0005C2T0001F{frame:03}.jpg"))
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let groups = groups_for(&refs);

        let mut rng = StdRng::seed_from_u64(7);
        write_test_split(&groups, temp.path(), &mut rng).unwrap();

        let rows = read_lines(&temp.path().join(outputs::TRACKS_TEST));
        assert_eq!(rows, vec!["1,7,5,2"]);
        assert_eq!(read_lines(&temp.path().join(outputs::TEST_NAMES)).len(), 7);
    }

    #[test]
    fn file_counter_is_cumulative_across_tracks() {
        let temp = tempdir().unwrap();
        let groups = groups_for(&[
            "0003C1T0001F001.jpg",
            "0003C1T0001F002.jpg",
            "0003C1T0001F003.jpg",
            "0003C1T0002F001.jpg",
            "0003C1T0002F002.jpg",
            "0003C1T0002F003.jpg",
            "0003C1T0002F004.jpg",
            "0003C1T0002F005.jpg",
        ]);

        write_train_split(&groups, temp.path()).unwrap();

        let rows = read_lines(&temp.path().join(outputs::TRACKS_TRAIN));
        assert_eq!(rows, vec!["1,3,3,1", "4,8,3,1"]);
    }

    #[test]
    fn name_blocks_are_sorted_per_track_and_follow_row_order() {
        let temp = tempdir().unwrap();
        // Enumeration order inside the track is deliberately reversed.
        let groups = groups_for(&[
            "0002C1T0001F002.jpg",
            "0002C1T0001F001.jpg",
            "0001C1T0001F001.jpg",
        ]);

        write_train_split(&groups, temp.path()).unwrap();

        let lines = read_lines(&temp.path().join(outputs::TRAIN_NAMES));
        assert_eq!(
            lines,
            vec![
                "0001C1T0001F001.jpg",
                "0002C1T0001F001.jpg",
                "0002C1T0001F002.jpg",
            ]
        );
    }

    #[test]
    fn query_rows_skip_distractor_junk_and_single_camera_labels() {
        let temp = tempdir().unwrap();
        let groups = groups_for(&[
            "00-1C1T0001F001.jpg",
            "00-1C2T0002F001.jpg",
            "0000C1T0003F001.jpg",
            "0000C2T0004F001.jpg",
            "0004C1T0005F001.jpg",
        ]);

        let mut rng = StdRng::seed_from_u64(11);
        write_test_split(&groups, temp.path(), &mut rng).unwrap();

        // -1 and 0 span two cameras but are excluded; 4 has a single camera.
        assert!(read_lines(&temp.path().join(outputs::QUERY_IDX)).is_empty());
    }

    #[test]
    fn multi_camera_label_yields_one_query_per_camera() {
        let temp = tempdir().unwrap();
        // Label 5: cam 1 holds tracks 1-2, cam 2 holds track 3.
        let groups = groups_for(&[
            "0005C1T0001F001.jpg",
            "0005C1T0002F001.jpg",
            "0005C2T0003F001.jpg",
        ]);

        let mut rng = StdRng::seed_from_u64(3);
        write_test_split(&groups, temp.path(), &mut rng).unwrap();

        let rows = read_lines(&temp.path().join(outputs::QUERY_IDX));
        assert_eq!(rows.len(), 2);
        let first: u64 = rows[0].parse().unwrap();
        let second: u64 = rows[1].parse().unwrap();
        // Each query index falls inside its own camera's track range.
        assert!((1..=2).contains(&first));
        assert_eq!(second, 3);
    }

    #[test]
    fn seeded_runs_reproduce_query_selection() {
        let groups = groups_for(&[
            "0005C1T0001F001.jpg",
            "0005C1T0002F001.jpg",
            "0005C2T0003F001.jpg",
            "0009C1T0004F001.jpg",
            "0009C3T0005F001.jpg",
        ]);

        let run = |seed: u64| {
            let temp = tempdir().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            write_test_split(&groups, temp.path(), &mut rng).unwrap();
            read_lines(&temp.path().join(outputs::QUERY_IDX))
        };

        assert_eq!(run(42), run(42));
    }
}
