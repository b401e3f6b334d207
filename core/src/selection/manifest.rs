use crate::error::Result;
use std::fmt;
use std::io::{BufWriter, Write};

/// One accepted (metadata file, image file) pair
///
/// Both paths are relative to the dataset root and always use `/`
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ManifestEntry {
    pub metadata_path: String,
    pub image_path: String,
}

impl ManifestEntry {
    pub fn new(metadata_path: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            metadata_path: metadata_path.into(),
            image_path: image_path.into(),
        }
    }
}

/// Manifest line form: `<metadata path>,<image path>`, no escaping
impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.metadata_path, self.image_path)
    }
}

/// Line-oriented manifest sink
///
/// Every entry is formatted in full before it reaches the buffered writer,
/// so the output only ever contains complete lines.
pub struct ManifestWriter<W: Write> {
    inner: BufWriter<W>,
    lines: usize,
}

impl<W: Write> ManifestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            lines: 0,
        }
    }

    /// Appends one entry as a single line
    pub fn write_entry(&mut self, entry: &ManifestEntry) -> Result<()> {
        let line = format!("{}\n", entry);
        self.inner.write_all(line.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_line_format() {
        let entry = ManifestEntry::new(
            "dvd1/data/ground_truths/xml/00001/00001_930831_fa.xml",
            "dvd1/data/images/00001/00001_930831_fa.ppm.bz2",
        );
        assert_eq!(
            entry.to_string(),
            "dvd1/data/ground_truths/xml/00001/00001_930831_fa.xml,dvd1/data/images/00001/00001_930831_fa.ppm.bz2"
        );
    }

    #[test]
    fn test_writer_emits_one_line_per_entry() {
        let mut writer = ManifestWriter::new(Vec::new());
        writer.write_entry(&ManifestEntry::new("a.xml", "dvd1/a.ppm")).unwrap();
        writer.write_entry(&ManifestEntry::new("b.xml", "dvd2/b.ppm")).unwrap();
        assert_eq!(writer.lines_written(), 2);

        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "a.xml,dvd1/a.ppm\nb.xml,dvd2/b.ppm\n"
        );
    }

    #[test]
    fn test_empty_manifest_has_no_header() {
        let writer = ManifestWriter::new(Vec::new());
        assert!(writer.into_inner().unwrap().is_empty());
    }
}
