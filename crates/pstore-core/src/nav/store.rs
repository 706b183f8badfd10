//! In-memory file list state owned by one view.

use crate::files::record::{FileRecord, FileRow};
use crate::nav::filter::filter_by_name;

/// The file collection together with its loading, error and search state.
///
/// Records only ever enter the store through [`FileStore::load`], which
/// replaces the whole collection; they leave through [`FileStore::remove`].
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    records: Vec<FileRecord>,
    loading: bool,
    error: Option<String>,
    search_term: String,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection with `records`, keeping their order.
    pub fn load(&mut self, records: Vec<FileRecord>) {
        self.records = records;
    }

    /// Returns the records matching `term` without touching the collection.
    pub fn filter(&self, term: &str) -> Vec<&FileRecord> {
        filter_by_name(&self.records, term)
    }

    /// Removes every record whose primary or alternate key equals `id`.
    ///
    /// Returns `true` if anything was removed. Removing an unknown id is
    /// a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| !r.matches_id(id));
        self.records.len() != before
    }

    /// Records matching the current search term.
    pub fn visible(&self) -> Vec<&FileRecord> {
        self.filter(&self.search_term)
    }

    /// Display rows for the records matching the current search term.
    pub fn visible_rows(&self) -> Vec<FileRow> {
        self.visible().into_iter().map(FileRecord::to_row).collect()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> FileRecord {
        FileRecord::new(id, name, 10, "text/plain", None, "")
    }

    fn store_with(records: Vec<FileRecord>) -> FileStore {
        let mut store = FileStore::new();
        store.load(records);
        store
    }

    fn ids(store: &FileStore) -> Vec<&str> {
        store.records().iter().filter_map(FileRecord::id).collect()
    }

    #[test]
    fn new_store_is_idle_and_empty() {
        let store = FileStore::new();
        assert!(store.is_empty());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(store.search_term(), "");
    }

    #[test]
    fn load_replaces_collection() {
        let mut store = store_with(vec![record("a", "a.txt")]);
        store.load(vec![record("b", "b.txt"), record("c", "c.txt")]);
        assert_eq!(ids(&store), vec!["b", "c"]);
    }

    #[test]
    fn remove_exact_match_preserves_order() {
        let mut store = store_with(vec![
            record("a", "a.txt"),
            record("b", "b.txt"),
            record("c", "c.txt"),
        ]);

        assert!(store.remove("b"));
        assert_eq!(ids(&store), vec!["a", "c"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = store_with(vec![record("a", "a.txt"), record("b", "b.txt")]);

        assert!(!store.remove("zzz"));
        assert_eq!(ids(&store), vec!["a", "b"]);
    }

    #[test]
    fn remove_twice_is_idempotent() {
        let mut store = store_with(vec![record("a", "a.txt"), record("b", "b.txt")]);
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[test]
    fn remove_matches_alternate_key() {
        let mut store = store_with(vec![
            record("a", "a.txt").with_alt_id("legacy-1"),
            record("b", "b.txt"),
        ]);

        assert!(store.remove("legacy-1"));
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[test]
    fn visible_follows_search_term() {
        let mut store = store_with(vec![record("a", "Report.pdf"), record("b", "photo.png")]);

        store.set_search_term("report");
        let visible: Vec<_> = store.visible().iter().map(|r| r.original_name()).collect();
        assert_eq!(visible, vec!["Report.pdf"]);

        store.set_search_term("");
        assert_eq!(store.visible().len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn visible_rows_are_formatted() {
        let mut store = FileStore::new();
        store.load(vec![FileRecord::new("a", "big.iso", 1_048_576, "application/x-iso", None, "")]);

        let rows = store.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].size, "1 MB");
    }

    #[test]
    fn error_set_and_clear() {
        let mut store = FileStore::new();
        store.set_error("boom");
        assert_eq!(store.error(), Some("boom"));
        store.clear_error();
        assert!(store.error().is_none());
    }
}
