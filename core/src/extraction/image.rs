use crate::error::{FeretError, Result};
use crate::types::ImageRecord;

use super::document::XmlDocument;
use super::paths::{
    get_attribute, get_flag, BEARD, FACE, GLASSES, HAIR, MUSTACHE, POSE, RECORDING, SUBJECT,
    SUBJECT_ID, URL, URL_RELATIVE, URL_ROOT,
};

/// Extracts acquisition attributes from an image metadata document
///
/// # Algorithm
///
/// 1. Locate `<Recording>` (required)
/// 2. Build the image path from `URL/@root` and `URL/@relative`
/// 3. Descend into `Subject/Application/Face` (all required)
/// 4. Read `Pose/@name` and `Wearing/@glasses` from the face
/// 5. Read `@beard` and `@mustache` from the face's `<Hair>` (required)
///
/// Only the container elements are required. Leaf attributes that are
/// absent read as empty strings or `false`.
pub fn extract_image(doc: &XmlDocument) -> Result<ImageRecord> {
    let missing = |element: &str| FeretError::missing_element(doc.source(), element);

    let recording = doc.container(RECORDING).ok_or_else(|| missing(RECORDING))?;

    let (root, relative) = match recording.child(URL) {
        Some(url) => (get_attribute(url, URL_ROOT), get_attribute(url, URL_RELATIVE)),
        None => (String::new(), String::new()),
    };

    let subject = recording.child(SUBJECT).ok_or_else(|| missing(SUBJECT))?;
    let face = subject.find(FACE).ok_or_else(|| missing("Face"))?;
    let hair = face.child(HAIR).ok_or_else(|| missing(HAIR))?;

    Ok(ImageRecord::new(
        get_attribute(subject, SUBJECT_ID),
        synthesize_image_path(&root, &relative),
        get_attribute(face, POSE),
        get_flag(face, GLASSES),
        get_flag(hair, BEARD),
        get_flag(hair, MUSTACHE),
    ))
}

/// Builds the dataset-relative image path `dvd<N>/<relative>`
///
/// `N` is the last digit of the URL root (which names the disc the image
/// was shipped on). Roots without any digit fall back to their last
/// character, and an empty root yields `dvd/<relative>`.
///
/// ```
/// use feretselect_core::extraction::synthesize_image_path;
///
/// assert_eq!(
///     synthesize_image_path("colorferet/dvd2", "subject1/img1.ppm"),
///     "dvd2/subject1/img1.ppm"
/// );
/// ```
pub fn synthesize_image_path(root: &str, relative: &str) -> String {
    let disc = root
        .chars()
        .rev()
        .find(|c| c.is_ascii_digit())
        .or_else(|| root.chars().last())
        .map(String::from)
        .unwrap_or_default();
    format!("dvd{}/{}", disc, relative)
}
