use std::path::PathBuf;
use thiserror::Error;

/// Result type for feretselect operations
pub type Result<T> = std::result::Result<T, FeretError>;

/// Error types for feretselect operations
#[derive(Error, Debug)]
pub enum FeretError {
    /// XML document could not be parsed
    #[error("XML error in {path}: {message}")]
    XmlError { path: String, message: String },

    /// A structurally required element is absent from a document
    #[error("Missing <{element}> element in {path}")]
    MissingElement { path: String, element: String },

    /// An expected metadata file or directory does not exist
    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    /// I/O error tied to a specific path
    #[error("IO error on {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset root does not exist or is not a directory
    #[error("Could not find directory {}", .0.display())]
    InvalidDatasetRoot(PathBuf),

    /// Tri-state inclusion value outside of any/yes/no
    #[error("Invalid inclusion value: {0:?} (expected any, yes or no)")]
    InvalidInclusion(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FeretError {
    /// Wraps an I/O error together with the path that caused it
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FeretError::FileError {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xml(path: &str, err: impl std::fmt::Display) -> Self {
        FeretError::XmlError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn missing_element(path: &str, element: &str) -> Self {
        FeretError::MissingElement {
            path: path.to_string(),
            element: element.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_path() {
        let err = FeretError::missing_element("dvd1/00001/00001_fa.xml", "Hair");
        assert_eq!(
            err.to_string(),
            "Missing <Hair> element in dvd1/00001/00001_fa.xml"
        );

        let err = FeretError::MissingFile(PathBuf::from("xml/00002/00002.xml"));
        assert!(err.to_string().contains("xml/00002/00002.xml"));

        let err = FeretError::InvalidDatasetRoot(PathBuf::from("/no/such/feret"));
        assert_eq!(err.to_string(), "Could not find directory /no/such/feret");
    }
}
