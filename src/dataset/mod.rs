//! Loaded dataset and the query facade over it

mod engine;
mod loader;

pub use engine::{CastEngine, CastError, CastResult, DatasetSummary};
pub use loader::{
    DataPaths, DatasetSources, ALIASES_FILE, CHAPTER_TO_BOOK_FILE, COMBINED_FILE, GROUPED_FILE,
};
