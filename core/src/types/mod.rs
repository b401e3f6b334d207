//! Core type definitions for FERET selection
//!
//! - [`SubjectRecord`]: demographics read from a subject's own metadata file
//! - [`ImageRecord`]: acquisition attributes read from one image's metadata file
//! - [`Inclusion`]: tri-state rule (any/yes/no) for a boolean image attribute
//! - [`FilterConfig`]: subject- and image-level inclusion criteria

mod enums;
mod filter;
mod record;

pub use enums::Inclusion;
pub use filter::{FilterConfig, DEFAULT_GENDERS, DEFAULT_POSES};
pub use record::{ImageRecord, SubjectRecord};
