pub mod report;

use crate::error::{FeretError, Result};
use crate::selection::WalkOptions;
use crate::types::FilterConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default manifest file name
pub const DEFAULT_DEST: &str = "filtered_feret.csv";

/// Command-line arguments for feretselect
#[derive(Parser, Debug)]
#[command(name = "feretselect")]
#[command(about = "Select Color FERET images by subject and acquisition attributes")]
#[command(version)]
pub struct Cli {
    /// Path to the Color FERET directory (containing dvd1 and dvd2)
    #[arg(value_name = "FERET_PATH")]
    pub feret_path: PathBuf,

    /// Path to output file, overwritten with results
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Comma-separated list of genders to include (Male,Female)
    #[arg(short, long, value_name = "GENDERS", value_delimiter = ',')]
    pub genders: Option<Vec<String>>,

    /// Comma-separated list of poses to include (fa,fb,pl,hl,ql,pr,hr,qr,ra,rb,rc,rd,re)
    #[arg(short, long, value_name = "POSES", value_delimiter = ',')]
    pub poses: Option<Vec<String>>,

    /// How images should be included based on glasses (any, yes, no)
    #[arg(short = 'e', long, value_name = "INCLUDE")]
    pub glasses: Option<String>,

    /// How images should be included based on beard (any, yes, no)
    #[arg(short, long, value_name = "INCLUDE")]
    pub beard: Option<String>,

    /// How images should be included based on mustache (any, yes, no)
    #[arg(short, long, value_name = "INCLUDE")]
    pub mustache: Option<String>,

    /// Visit subjects and images in name order
    #[arg(long)]
    pub sorted: bool,

    /// Skip subjects with missing or malformed metadata instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Format of the run summary printed on stdout
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

impl Cli {
    /// Dataset root with any trailing separator removed
    pub fn dataset_root(&self) -> PathBuf {
        let text = self.feret_path.to_string_lossy();
        let trimmed = text.trim_end_matches('/');
        if trimmed.is_empty() {
            self.feret_path.clone()
        } else {
            PathBuf::from(trimmed)
        }
    }

    /// Dataset root, verified to be an existing directory
    ///
    /// Checked before the manifest is created so a bad path leaves no
    /// output file behind.
    pub fn checked_dataset_root(&self) -> Result<PathBuf> {
        let root = self.dataset_root();
        if root.is_dir() {
            Ok(root)
        } else {
            Err(FeretError::InvalidDatasetRoot(root))
        }
    }

    /// Builds the filter from the command line
    ///
    /// Unrecognised glasses/beard/mustache values are ignored with a
    /// warning and leave the default `any` in place.
    pub fn filter_config(&self) -> FilterConfig {
        let mut filter = FilterConfig::default();
        if let Some(genders) = &self.genders {
            filter = filter.with_genders(genders.iter().map(|g| g.trim()));
        }
        if let Some(poses) = &self.poses {
            filter = filter.with_poses(poses.iter().map(|p| p.trim()));
        }
        if let Some(value) = &self.glasses {
            filter.set_glasses(value);
        }
        if let Some(value) = &self.beard {
            filter.set_beard(value);
        }
        if let Some(value) = &self.mustache {
            filter.set_mustache(value);
        }
        filter
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            sort_entries: self.sorted,
            skip_invalid_subjects: self.skip_invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Inclusion, DEFAULT_POSES};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("feretselect").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["/data/colorferet"]);
        assert_eq!(cli.dest, PathBuf::from(DEFAULT_DEST));
        assert_eq!(cli.filter_config(), FilterConfig::default());
        assert_eq!(cli.walk_options(), WalkOptions::default());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(Cli::try_parse_from(["feretselect"]).is_err());
    }

    #[test]
    fn test_list_options() {
        let cli = parse(&["-g", "Female", "-p", "fa,fb", "/data"]);
        let filter = cli.filter_config();
        assert_eq!(filter.genders.len(), 1);
        assert!(filter.genders.contains("Female"));
        assert_eq!(filter.poses.iter().collect::<Vec<_>>(), vec!["fa", "fb"]);
        assert_eq!(DEFAULT_POSES.len(), 13);
    }

    #[test]
    fn test_inclusion_options() {
        let cli = parse(&["--glasses", "yes", "-b", "no", "-m", "maybe", "/data"]);
        let filter = cli.filter_config();
        assert_eq!(filter.glasses, Inclusion::Yes);
        assert_eq!(filter.beard, Inclusion::No);
        assert_eq!(filter.mustache, Inclusion::Any);
    }

    #[test]
    fn test_trailing_slash_is_removed() {
        assert_eq!(parse(&["/data/feret/"]).dataset_root(), PathBuf::from("/data/feret"));
        assert_eq!(parse(&["/"]).dataset_root(), PathBuf::from("/"));
    }

    #[test]
    fn test_checked_dataset_root() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let existing = format!("{}/", temp_dir.path().display());
        assert_eq!(
            parse(&[existing.as_str()]).checked_dataset_root().unwrap(),
            temp_dir.path()
        );

        let missing = temp_dir.path().join("absent");
        let err = parse(&[missing.to_str().unwrap()])
            .checked_dataset_root()
            .unwrap_err();
        assert!(matches!(err, FeretError::InvalidDatasetRoot(p) if p == missing));

        // a plain file is not a dataset root
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        assert!(parse(&[file.to_str().unwrap()]).checked_dataset_root().is_err());
    }

    #[test]
    fn test_walk_flags() {
        let cli = parse(&["--sorted", "--skip-invalid", "-d", "out.csv", "/data"]);
        assert_eq!(cli.dest, PathBuf::from("out.csv"));
        assert!(cli.walk_options().sort_entries);
        assert!(cli.walk_options().skip_invalid_subjects);
    }
}
