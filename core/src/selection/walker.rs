use crate::api::FeretExtractor;
use crate::error::{FeretError, Result};
use crate::selection::manifest::ManifestEntry;
use crate::types::FilterConfig;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Ground-truth directory of a volume, relative to the dataset root
pub fn ground_truth_dir(volume: u8) -> String {
    format!("dvd{}/data/ground_truths/xml", volume)
}

/// Traversal options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct WalkOptions {
    /// Visit subjects and image files in name order instead of the order
    /// the filesystem reports them
    pub sort_entries: bool,

    /// Log and skip a subject whose metadata cannot be read instead of
    /// aborting the walk
    pub skip_invalid_subjects: bool,
}

/// Counters collected while walking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct WalkSummary {
    pub subjects_seen: usize,

    /// Subjects that passed the subject filter and whose image files were
    /// all read
    pub subjects_accepted: usize,

    /// Subjects abandoned in lenient mode. A subject abandoned on a bad
    /// image file may already have contributed manifest lines.
    pub subjects_skipped: usize,
    pub images_examined: usize,
    pub images_accepted: usize,
}

impl WalkSummary {
    /// Adds another summary's counters to this one
    pub fn merge(&mut self, other: &WalkSummary) {
        self.subjects_seen += other.subjects_seen;
        self.subjects_accepted += other.subjects_accepted;
        self.subjects_skipped += other.subjects_skipped;
        self.images_examined += other.images_examined;
        self.images_accepted += other.images_accepted;
    }
}

struct SubjectCursor {
    subject_id: String,
    images: std::vec::IntoIter<PathBuf>,
}

/// Lazy walk over one volume of the dataset
///
/// Yields one [`ManifestEntry`] per accepted image. Subjects rejected by
/// [`FilterConfig::accept_subject`] are skipped without reading any of
/// their image files. After the first error the walker is exhausted.
///
/// Unless [`WalkOptions::sort_entries`] is set, entries come out in the
/// order the filesystem lists them, which differs between platforms.
pub struct DatasetWalker<'a> {
    xml_dir: PathBuf,
    xml_rel: String,
    filter: &'a FilterConfig,
    options: WalkOptions,
    subjects: Option<std::vec::IntoIter<PathBuf>>,
    current: Option<SubjectCursor>,
    summary: WalkSummary,
    finished: bool,
}

impl<'a> DatasetWalker<'a> {
    /// Creates a walker for `<dataset_root>/dvd<volume>`
    ///
    /// Nothing is read until the first call to `next`.
    pub fn new(
        dataset_root: &Path,
        volume: u8,
        filter: &'a FilterConfig,
        options: WalkOptions,
    ) -> Self {
        let xml_rel = ground_truth_dir(volume);
        Self {
            xml_dir: dataset_root.join(&xml_rel),
            xml_rel,
            filter,
            options,
            subjects: None,
            current: None,
            summary: WalkSummary::default(),
            finished: false,
        }
    }

    /// Counters for the part of the volume walked so far
    pub fn summary(&self) -> &WalkSummary {
        &self.summary
    }

    fn advance(&mut self) -> Result<Option<ManifestEntry>> {
        if self.subjects.is_none() {
            info!("Processing {}", self.xml_dir.display());
            let dirs = list_subject_dirs(&self.xml_dir, self.options.sort_entries)?;
            self.subjects = Some(dirs.into_iter());
        }

        loop {
            if let Some(cursor) = self.current.as_mut() {
                let Some(image_path) = cursor.images.next() else {
                    self.current = None;
                    continue;
                };
                let subject_id = cursor.subject_id.clone();

                match self.examine_image(&subject_id, &image_path) {
                    Ok(Some(entry)) => return Ok(Some(entry)),
                    Ok(None) => {}
                    Err(e) if self.options.skip_invalid_subjects => {
                        warn!("Skipping rest of subject {}: {}", subject_id, e);
                        // counted as skipped, not accepted
                        self.summary.subjects_accepted -= 1;
                        self.summary.subjects_skipped += 1;
                        self.current = None;
                    }
                    Err(e) => return Err(e),
                }
                continue;
            }

            let Some(subject_dir) = self.subjects.as_mut().and_then(|s| s.next()) else {
                return Ok(None);
            };

            match self.open_subject(&subject_dir) {
                Ok(cursor) => self.current = cursor,
                Err(e) if self.options.skip_invalid_subjects => {
                    warn!("Skipping subject {}: {}", subject_dir.display(), e);
                    self.summary.subjects_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Loads a subject's demographics and, if accepted, lists its image files
    fn open_subject(&mut self, subject_dir: &Path) -> Result<Option<SubjectCursor>> {
        let subject_id = file_name(subject_dir);
        self.summary.subjects_seen += 1;

        let subject_file = subject_dir.join(format!("{}.xml", subject_id));
        if !subject_file.is_file() {
            return Err(FeretError::MissingFile(subject_file));
        }

        let subject = FeretExtractor::subject_from_file(&subject_file)?;
        if !self.filter.accept_subject(&subject) {
            debug!("Rejected {}", subject);
            return Ok(None);
        }
        self.summary.subjects_accepted += 1;

        let images = list_image_files(subject_dir, &subject_id, self.options.sort_entries)?;
        Ok(Some(SubjectCursor {
            subject_id,
            images: images.into_iter(),
        }))
    }

    fn examine_image(&mut self, subject_id: &str, path: &Path) -> Result<Option<ManifestEntry>> {
        self.summary.images_examined += 1;

        let image = FeretExtractor::image_from_file(path)?;
        if !self.filter.accept_image(&image) {
            debug!("Rejected {}", image);
            return Ok(None);
        }
        self.summary.images_accepted += 1;

        let metadata_path = format!("{}/{}/{}", self.xml_rel, subject_id, file_name(path));
        Ok(Some(ManifestEntry::new(metadata_path, image.path())))
    }
}

impl Iterator for DatasetWalker<'_> {
    type Item = Result<ManifestEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_dir_paths(dir: &Path, sort: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FeretError::MissingFile(dir.to_path_buf()));
    }

    // read_dir never yields "." or ".."
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FeretError::file(dir, e))? {
        let entry = entry.map_err(|e| FeretError::file(dir, e))?;
        paths.push(entry.path());
    }

    if sort {
        paths.sort();
    }
    Ok(paths)
}

/// Lists subject directories under a volume's ground-truth directory
///
/// Plain files at this level are ignored.
fn list_subject_dirs(xml_dir: &Path, sort: bool) -> Result<Vec<PathBuf>> {
    Ok(read_dir_paths(xml_dir, sort)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

/// Lists a subject's image metadata files: every `.xml` file except the
/// subject's own `<id>.xml`
fn list_image_files(subject_dir: &Path, subject_id: &str, sort: bool) -> Result<Vec<PathBuf>> {
    Ok(read_dir_paths(subject_dir, sort)?
        .into_iter()
        .filter(|path| path.is_file() && is_image_metadata(path, subject_id))
        .collect())
}

fn is_image_metadata(path: &Path, subject_id: &str) -> bool {
    let is_xml = path.extension().is_some_and(|ext| ext == "xml");
    let is_subject_file = path.file_stem().is_some_and(|stem| stem == subject_id);
    is_xml && !is_subject_file
}
