use super::document::XmlElement;

// Container elements
pub const SUBJECT: &str = "Subject";
pub const RECORDING: &str = "Recording";
pub const URL: &str = "URL";
pub const FACE: &str = "Application/Face";
pub const HAIR: &str = "Hair";

// Subject demographics (relative to <Subject>)
pub const SUBJECT_ID: &str = "@id";
pub const GENDER: &str = "Gender/@value";
pub const BIRTH_YEAR: &str = "YOB/@value";
pub const RACE: &str = "Race/@value";

// Image location (relative to <URL>)
pub const URL_ROOT: &str = "@root";
pub const URL_RELATIVE: &str = "@relative";

// Acquisition attributes (relative to <Face>)
pub const POSE: &str = "Pose/@name";
pub const GLASSES: &str = "Wearing/@glasses";

// Facial hair (relative to <Hair>)
pub const BEARD: &str = "@beard";
pub const MUSTACHE: &str = "@mustache";

/// Helper to get an attribute value by path
///
/// Returns the attribute text unmodified, or an empty string if any part
/// of the path is absent
pub fn get_attribute(element: &XmlElement, path: &str) -> String {
    element.attribute_at(path).unwrap_or_default().to_string()
}

/// Helper to get a Yes/No flag by path
///
/// `true` only when the value equals "Yes" ignoring case; anything else,
/// including an absent attribute, is `false`
pub fn get_flag(element: &XmlElement, path: &str) -> bool {
    is_yes(element.attribute_at(path).unwrap_or_default())
}

/// Case-insensitive comparison against "Yes"
pub fn is_yes(value: &str) -> bool {
    value.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::document::XmlDocument;
    use rstest::rstest;

    #[rstest]
    #[case("yes", true)]
    #[case("Yes", true)]
    #[case("YES", true)]
    #[case("no", false)]
    #[case("No", false)]
    #[case("", false)]
    #[case("y", false)]
    #[case(" Yes ", false)]
    #[case("Yes ", false)]
    #[case(" yes", false)]
    fn test_is_yes(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_yes(value), expected);
    }

    #[test]
    fn test_get_flag_absent_attribute_is_false() {
        let doc = XmlDocument::parse("h.xml", r#"<Hair beard="YES"/>"#).unwrap();
        assert!(get_flag(doc.root(), BEARD));
        assert!(!get_flag(doc.root(), MUSTACHE));
    }

    #[test]
    fn test_padded_flag_is_false() {
        let doc = XmlDocument::parse("w.xml", r#"<Wearing glasses=" Yes "/>"#).unwrap();
        assert!(!get_flag(doc.root(), "@glasses"));
    }

    #[test]
    fn test_get_attribute_defaults_to_empty() {
        let doc = XmlDocument::parse("s.xml", r#"<Subject id="00001"><YOB value=" 1943 "/></Subject>"#)
            .unwrap();
        assert_eq!(get_attribute(doc.root(), SUBJECT_ID), "00001");
        assert_eq!(get_attribute(doc.root(), BIRTH_YEAR), " 1943 ");
        assert_eq!(get_attribute(doc.root(), GENDER), "");
        assert_eq!(get_attribute(doc.root(), RACE), "");
    }
}
