use crate::selection::WalkSummary;
use crate::types::FilterConfig;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Text report for a completed selection run
pub struct TextReport<'a> {
    summary: &'a WalkSummary,
    filter: &'a FilterConfig,
    manifest: &'a Path,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a WalkSummary, filter: &'a FilterConfig, manifest: &'a Path) -> Self {
        Self {
            summary,
            filter,
            manifest,
        }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FERET Selection")?;
        writeln!(f, "===============")?;
        writeln!(f)?;
        writeln!(f, "Manifest:       {}", self.manifest.display())?;
        writeln!(f, "Genders:        {}", join(&self.filter.genders))?;
        writeln!(f, "Poses:          {}", join(&self.filter.poses))?;
        writeln!(f, "Glasses:        {}", self.filter.glasses)?;
        writeln!(f, "Beard:          {}", self.filter.beard)?;
        writeln!(f, "Mustache:       {}", self.filter.mustache)?;
        writeln!(f)?;

        writeln!(f, "Counts")?;
        writeln!(f, "------")?;
        writeln!(
            f,
            "Subjects:       {} accepted of {}",
            self.summary.subjects_accepted, self.summary.subjects_seen
        )?;
        if self.summary.subjects_skipped > 0 {
            writeln!(f, "Skipped:        {}", self.summary.subjects_skipped)?;
        }
        writeln!(
            f,
            "Images:         {} accepted of {}",
            self.summary.images_accepted, self.summary.images_examined
        )?;

        Ok(())
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}
