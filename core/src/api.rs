use crate::error::Result;
use crate::extraction::{extract_image, extract_subject, XmlDocument};
use crate::types::{ImageRecord, SubjectRecord};
use std::path::Path;

/// Main extractor for FERET ground-truth metadata
///
/// Each call opens, parses and releases one document; nothing is cached
/// between calls.
///
/// # Example
///
/// ```
/// use feretselect_core::FeretExtractor;
///
/// let subject = FeretExtractor::subject_from_str(
///     "00001.xml",
///     r#"<Subjects><Subject id="00001"><Gender value="Female"/></Subject></Subjects>"#,
/// )
/// .unwrap();
/// assert_eq!(subject.gender(), "Female");
///
/// let image = FeretExtractor::image_from_str(
///     "00001_930831_fa.xml",
///     r#"<Recordings><Recording>
///          <URL root="colorferet/dvd1" relative="data/images/00001/00001_930831_fa.ppm.bz2"/>
///          <Subject id="00001"><Application><Face>
///            <Pose name="fa"/><Wearing glasses="No"/><Hair beard="No" mustache="Yes"/>
///          </Face></Application></Subject>
///        </Recording></Recordings>"#,
/// )
/// .unwrap();
/// assert_eq!(image.path(), "dvd1/data/images/00001/00001_930831_fa.ppm.bz2");
/// assert!(image.has_mustache());
/// ```
pub struct FeretExtractor;

impl FeretExtractor {
    /// Reads a subject demographics file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not
    /// well-formed XML, or has no `<Subject>` element
    pub fn subject_from_file(path: &Path) -> Result<SubjectRecord> {
        let doc = XmlDocument::open(path)?;
        extract_subject(&doc)
    }

    /// Reads an image metadata file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not
    /// well-formed XML, or lacks one of the `Recording`, `Subject`, `Face`
    /// or `Hair` elements
    pub fn image_from_file(path: &Path) -> Result<ImageRecord> {
        let doc = XmlDocument::open(path)?;
        extract_image(&doc)
    }

    /// Parses subject demographics from an in-memory document
    pub fn subject_from_str(source: &str, xml: &str) -> Result<SubjectRecord> {
        extract_subject(&XmlDocument::parse(source, xml)?)
    }

    /// Parses image attributes from an in-memory document
    pub fn image_from_str(source: &str, xml: &str) -> Result<ImageRecord> {
        extract_image(&XmlDocument::parse(source, xml)?)
    }
}
