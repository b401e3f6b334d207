pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod selection;
pub mod types;

pub use api::FeretExtractor;
pub use cli::report::TextReport;
pub use error::{FeretError, Result};
pub use selection::{
    select_volumes, DatasetWalker, ManifestEntry, ManifestWriter, WalkOptions, WalkSummary,
    FERET_VOLUMES,
};
pub use types::*;
