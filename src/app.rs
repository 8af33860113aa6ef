//! CLI definition and the end-to-end build pipeline.

use std::error::Error;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, error::ErrorKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::errors::BuildError;
use crate::grouping;
use crate::labels::{self, DerivedLabels};
use crate::listing;
use crate::summary::summarize;
use crate::writer;

/// Command-line interface for the X-MARS builder.
#[derive(Debug, Parser)]
#[command(
    name = "x-mars",
    disable_help_subcommand = true,
    about = "Build the X-MARS re-identification index files",
    long_about = "Cross-reference Market-1501 and MARS on shared identity labels, group every MARS image by label, camera, and track, and write contiguous range-index CSV files plus a randomized query-track selection.",
    after_help = "The output directory is deleted and recreated on every run."
)]
pub struct Cli {
    /// Market-1501 dataset root.
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding the Market-1501 dataset"
    )]
    pub market: PathBuf,
    /// MARS dataset root.
    #[arg(long, value_name = "DIR", help = "Directory holding the MARS dataset")]
    pub mars: PathBuf,
    /// Output directory, destroyed and recreated per run.
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory where the X-MARS files are written"
    )]
    pub output: PathBuf,
    /// Seed for the query-track selection RNG.
    #[arg(long, help = "Optional seed for reproducible query-track selection")]
    pub seed: Option<u64>,
}

/// Parse `args` and run the full build.
///
/// `--help` and `--version` print and return `Ok(())` without building.
pub fn run<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let Some(cli) = parse_cli::<Cli, _>(args)? else {
        return Ok(());
    };

    reset_output_dir(&cli.output)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    create_x_mars(&cli.market, &cli.mars, &cli.output, &mut rng)?;
    Ok(())
}

/// Run the whole pipeline: list, intersect, partition, group, write.
///
/// `output_dir` must already exist; `run` prepares it with
/// [`reset_output_dir`]. `rng` drives the query-track selection.
pub fn create_x_mars<R: Rng>(
    market_dir: &Path,
    mars_dir: &Path,
    output_dir: &Path,
    rng: &mut R,
) -> Result<(), BuildError> {
    let market_test = listing::market_test_files(market_dir)?;
    let market_test_labels = labels::unique_market_labels(&market_test)?;
    let market_train = listing::market_train_files(market_dir)?;
    let market_train_labels = labels::unique_market_labels(&market_train)?;
    info!(
        test_labels = market_test_labels.len(),
        train_labels = market_train_labels.len(),
        "market label universes"
    );
    debug!(?market_test_labels, ?market_train_labels, "market labels");

    let mars_test = listing::mars_test_files(mars_dir)?;
    let mars_train = listing::mars_train_files(mars_dir)?;
    let mars_all_labels = labels::merged_universe(
        &labels::unique_mars_labels(&mars_test)?,
        &labels::unique_mars_labels(&mars_train)?,
    );
    info!(labels = mars_all_labels.len(), "merged mars label universe");
    debug!(?mars_all_labels, "mars labels");

    let derived =
        DerivedLabels::derive(&market_test_labels, &market_train_labels, &mars_all_labels);
    info!(
        test = derived.test.len(),
        train = derived.train.len(),
        "derived split label sets"
    );
    debug!(?derived, "derived labels");

    let mut mars_all_files = mars_test;
    mars_all_files.extend(mars_train);
    let (test_files, train_files) =
        grouping::partition_by_test_labels(mars_all_files, &derived.test)?;

    let test_groups = grouping::group_by_label_cam_track(&test_files)?;
    let train_groups = grouping::group_by_label_cam_track(&train_files)?;

    writer::write_test_split(&test_groups, output_dir, rng)?;
    writer::write_train_split(&train_groups, output_dir)?;

    let test_summary = summarize(&test_groups);
    let train_summary = summarize(&train_groups);
    info!(
        files = test_summary.files,
        labels = test_summary.labels,
        tracks = test_summary.tracks,
        "wrote test split"
    );
    info!(
        files = train_summary.files,
        labels = train_summary.labels,
        tracks = train_summary.tracks,
        "wrote train split"
    );
    Ok(())
}

/// Delete `dir` wholesale if present, then recreate it empty.
///
/// Pre-existing content is never merged with a new run's output.
pub fn reset_output_dir(dir: &Path) -> Result<(), BuildError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_all_three_directories() {
        let err = Cli::try_parse_from(["x-mars", "--market", "/m", "--mars", "/r"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn cli_accepts_an_optional_seed() {
        let cli = Cli::try_parse_from([
            "x-mars", "--market", "/m", "--mars", "/r", "--output", "/o", "--seed", "9",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.output, PathBuf::from("/o"));
    }

    #[test]
    fn help_is_not_a_build_error() {
        let parsed = parse_cli::<Cli, _>(["x-mars", "--help"]).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn reset_output_dir_removes_stale_content() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.csv"), b"old").unwrap();

        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}
