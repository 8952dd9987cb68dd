//! Per-chapter interaction data and chapter selection
//!
//! Chapters are addressed by string keys ("Chapter 12") whose trailing
//! digits give the ordinal used for range filtering and ordering. A
//! [`ChapterStore`] holds the interaction lists of every chapter, the derived
//! character list per chapter and the chapter → book mapping used by
//! [`ChapterQuery`].

mod book;
mod key;
mod query;
mod record;
mod store;

pub use book::{BookLabel, BookMapping};
pub use key::{chapter_key, chapter_ordinal, normalize_chapter_key};
pub use query::{ChapterQuery, ALL_BOOKS};
pub use record::{ChapterRecord, InteractionRecord};
pub use store::{ChapterStore, InteractionSelection};
