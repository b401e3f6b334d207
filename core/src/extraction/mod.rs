pub mod document;
pub mod image;
pub mod paths;
pub mod subject;

pub use document::{XmlDocument, XmlElement};
pub use image::{extract_image, synthesize_image_path};
pub use paths::{get_attribute, get_flag, is_yes};
pub use subject::extract_subject;
