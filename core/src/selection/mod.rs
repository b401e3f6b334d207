//! Dataset traversal and manifest output
//!
//! Walks `<root>/dvd<N>/data/ground_truths/xml/<subject>/` for each volume,
//! applies a [`FilterConfig`] at subject and image level, and writes one
//! manifest line per accepted image.

#[cfg(test)]
pub(crate) mod fixtures;
mod manifest;
mod walker;

pub use manifest::{ManifestEntry, ManifestWriter};
pub use walker::{ground_truth_dir, DatasetWalker, WalkOptions, WalkSummary};

use crate::error::{FeretError, Result};
use crate::types::FilterConfig;
use log::{info, warn};
use std::io::Write;
use std::path::Path;

/// The two discs the Color FERET release ships on
pub const FERET_VOLUMES: [u8; 2] = [1, 2];

/// Walks each volume in turn and writes accepted pairs to `writer`
///
/// The dataset root is checked before anything is read. Any error aborts
/// the run (unless [`WalkOptions::skip_invalid_subjects`] absorbs it); the
/// writer is flushed first so the manifest holds only complete lines.
pub fn select_volumes<W: Write>(
    dataset_root: &Path,
    volumes: &[u8],
    filter: &FilterConfig,
    options: WalkOptions,
    writer: &mut ManifestWriter<W>,
) -> Result<WalkSummary> {
    if !dataset_root.is_dir() {
        return Err(FeretError::InvalidDatasetRoot(dataset_root.to_path_buf()));
    }

    info!("Using filter {}", filter);

    let mut total = WalkSummary::default();
    for &volume in volumes {
        let mut walker = DatasetWalker::new(dataset_root, volume, filter, options);
        let outcome = walker
            .by_ref()
            .try_for_each(|entry| writer.write_entry(&entry?));
        total.merge(walker.summary());

        if let Err(e) = outcome {
            if let Err(flush_err) = writer.flush() {
                warn!("Failed to flush manifest: {}", flush_err);
            }
            return Err(e);
        }
        info!(
            "Volume {}: {} of {} images accepted",
            volume,
            walker.summary().images_accepted,
            walker.summary().images_examined
        );
    }

    writer.flush()?;
    Ok(total)
}
