use crate::error::{FeretError, Result};
use crate::types::SubjectRecord;

use super::document::XmlDocument;
use super::paths::{get_attribute, BIRTH_YEAR, GENDER, RACE, SUBJECT, SUBJECT_ID};

/// Extracts demographics from a subject metadata document
///
/// The `<Subject>` element is required; its `id` attribute and the `value`
/// attributes of its `Gender`, `YOB` and `Race` children are optional and
/// default to empty strings.
pub fn extract_subject(doc: &XmlDocument) -> Result<SubjectRecord> {
    let subject = doc
        .container(SUBJECT)
        .ok_or_else(|| FeretError::missing_element(doc.source(), SUBJECT))?;

    Ok(SubjectRecord::new(
        get_attribute(subject, SUBJECT_ID),
        get_attribute(subject, GENDER),
        get_attribute(subject, BIRTH_YEAR),
        get_attribute(subject, RACE),
    ))
}
