//! Chapter selection by ordinal range and book

use super::key::chapter_ordinal;
use super::store::ChapterStore;

/// Sentinel book value meaning "no book filter"
pub const ALL_BOOKS: &str = "all";

/// Query selecting chapter keys from a [`ChapterStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterQuery {
    /// Lowest chapter ordinal to include
    pub start: Option<i64>,
    /// Highest chapter ordinal to include
    pub end: Option<i64>,
    /// Book label to match (case-insensitive); `"all"` or empty disables the filter
    pub book: Option<String>,
}

impl ChapterQuery {
    /// Create a new empty query (matches every chapter)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Inclusive ordinal range
    pub fn with_range(self, start: i64, end: i64) -> Self {
        self.with_start(start).with_end(end)
    }

    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// The book filter in effect, if any
    pub fn book_filter(&self) -> Option<&str> {
        self.book
            .as_deref()
            .filter(|b| !b.is_empty() && !b.eq_ignore_ascii_case(ALL_BOOKS))
    }

    /// Execute against a store, returning keys ordered by chapter ordinal.
    ///
    /// Chapters without an ordinal keep their load order relative to each
    /// other and come first when no range is given.
    pub fn execute(&self, store: &ChapterStore) -> Vec<String> {
        let ranged = self.start.is_some() || self.end.is_some();
        let book = self.book_filter();

        let mut keys: Vec<String> = store
            .keys()
            .iter()
            .filter(|key| !ranged || self.in_range(key))
            .filter(|key| book.map_or(true, |b| store.books().is_in_book(key, b)))
            .cloned()
            .collect();

        keys.sort_by_key(|key| chapter_ordinal(key));
        keys
    }

    fn in_range(&self, key: &str) -> bool {
        let Some(n) = chapter_ordinal(key) else {
            return false;
        };
        let n = i128::from(n);
        if let Some(start) = self.start {
            if n < i128::from(start) {
                return false;
            }
        }
        if let Some(end) = self.end {
            if n > i128::from(end) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::{BookMapping, ChapterRecord};

    fn store(keys: &[&str], books: &[(&str, &str)]) -> ChapterStore {
        let mut mapping = BookMapping::new();
        for (key, book) in books {
            mapping.insert(key, *book);
        }
        ChapterStore::from_records(
            keys.iter()
                .map(|k| (k.to_string(), ChapterRecord::default())),
            mapping,
        )
    }

    #[test]
    fn no_filter_returns_all_in_ordinal_order() {
        let store = store(&["Chapter 10", "Chapter 2", "Chapter 1"], &[]);
        assert_eq!(
            ChapterQuery::new().execute(&store),
            vec!["Chapter 1", "Chapter 2", "Chapter 10"]
        );
    }

    #[test]
    fn unnumbered_keys_kept_without_range() {
        let store = store(&["Chapter 3", "Finale", "Prelude", "Chapter 1"], &[]);
        assert_eq!(
            ChapterQuery::new().execute(&store),
            vec!["Finale", "Prelude", "Chapter 1", "Chapter 3"]
        );
    }

    #[test]
    fn inclusive_range() {
        let keys: Vec<String> = (1..=12).map(|n| format!("Chapter {}", n)).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let store = store(&refs, &[]);

        let selected = ChapterQuery::new().with_range(5, 10).execute(&store);
        let expected: Vec<String> = (5..=10).map(|n| format!("Chapter {}", n)).collect();
        assert_eq!(selected, expected);
    }

    #[test]
    fn open_ended_ranges() {
        let store = store(&["Chapter 1", "Chapter 2", "Chapter 3", "Prelude"], &[]);
        assert_eq!(
            ChapterQuery::new().with_start(2).execute(&store),
            vec!["Chapter 2", "Chapter 3"]
        );
        assert_eq!(
            ChapterQuery::new().with_end(1).execute(&store),
            vec!["Chapter 1"]
        );
    }

    #[test]
    fn any_bound_excludes_unnumbered_keys() {
        let store = store(&["Prelude", "Chapter 1"], &[]);
        assert_eq!(
            ChapterQuery::new().with_start(0).execute(&store),
            vec!["Chapter 1"]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        let store = store(&["Chapter 1", "Chapter 2"], &[]);
        assert!(ChapterQuery::new().with_range(2, 1).execute(&store).is_empty());
    }

    #[test]
    fn book_filter() {
        let store = store(
            &["Chapter 1", "Chapter 2", "Chapter 3"],
            &[("Chapter 1", "1"), ("Chapter 2", "1"), ("Chapter 3", "2")],
        );
        assert_eq!(
            ChapterQuery::new().with_book("1").execute(&store),
            vec!["Chapter 1", "Chapter 2"]
        );
        assert_eq!(
            ChapterQuery::new().with_book("2").execute(&store),
            vec!["Chapter 3"]
        );
        assert!(ChapterQuery::new().with_book("9").execute(&store).is_empty());
    }

    #[test]
    fn all_and_empty_disable_book_filter() {
        let store = store(&["Chapter 1", "Chapter 2"], &[("Chapter 1", "1")]);
        assert_eq!(ChapterQuery::new().with_book("all").execute(&store).len(), 2);
        assert_eq!(ChapterQuery::new().with_book("ALL").execute(&store).len(), 2);
        assert_eq!(ChapterQuery::new().with_book("").execute(&store).len(), 2);
    }

    #[test]
    fn range_and_book_combine() {
        let store = store(
            &["Chapter 1", "Chapter 2", "Chapter 3", "Chapter 4"],
            &[
                ("Chapter 1", "1"),
                ("Chapter 2", "1"),
                ("Chapter 3", "1"),
                ("Chapter 4", "2"),
            ],
        );
        assert_eq!(
            ChapterQuery::new()
                .with_range(2, 4)
                .with_book("1")
                .execute(&store),
            vec!["Chapter 2", "Chapter 3"]
        );
    }

    #[test]
    fn empty_store_selects_nothing() {
        let store = ChapterStore::new();
        assert!(ChapterQuery::new().execute(&store).is_empty());
        assert!(ChapterQuery::new().with_range(1, 5).execute(&store).is_empty());
    }
}
