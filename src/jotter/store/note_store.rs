use super::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::{require_non_empty, Field, Note, Notes};
use tracing::{debug, info};

/// The note repository: an insertion-ordered title → body map, written through
/// to its backend on every mutation.
///
/// Mutations are staged on a copy of the map. The copy is committed only after the
/// backend accepted it, so a failed flush leaves memory and storage untouched.
pub struct NoteStore<B: StorageBackend> {
    backend: B,
    notes: Notes,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Load everything the backend holds. A backend with no data yields an empty store.
    pub fn load(backend: B) -> Result<Self> {
        let notes = backend.load()?;
        debug!(count = notes.len(), "note store loaded");
        Ok(Self { backend, notes })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.notes.contains_key(title)
    }

    /// All notes, in insertion order. Each item is a copy.
    pub fn notes(&self) -> impl Iterator<Item = Note> + '_ {
        self.notes
            .iter()
            .map(|(title, body)| Note::new(title.clone(), body.clone()))
    }

    /// Titles whose lowercase form contains the lowercase `filter`.
    /// An empty filter matches everything. Order is insertion order.
    pub fn list_titles(&self, filter: &str) -> Vec<String> {
        let needle = filter.to_lowercase();
        self.notes
            .keys()
            .filter(|title| title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn get(&self, title: &str) -> Result<String> {
        self.notes
            .get(title)
            .cloned()
            .ok_or_else(|| JotError::NotFound(title.to_string()))
    }

    /// Insert a note, overwriting any note with the same title.
    pub fn create(&mut self, title: &str, body: &str) -> Result<()> {
        require_non_empty(title, Field::Title)?;
        require_non_empty(body, Field::Body)?;

        let mut staged = self.notes.clone();
        staged.insert(title.to_string(), body.to_string());
        self.commit(staged)?;
        info!(title, "note created");
        Ok(())
    }

    /// Replace the body of an existing note.
    pub fn update(&mut self, title: &str, body: &str) -> Result<()> {
        if !self.notes.contains_key(title) {
            return Err(JotError::NotFound(title.to_string()));
        }

        let mut staged = self.notes.clone();
        staged.insert(title.to_string(), body.to_string());
        self.commit(staged)?;
        info!(title, "note updated");
        Ok(())
    }

    /// Move a note to a new title. An existing note at `new_title` is overwritten.
    /// Renaming a note to its own title does nothing and does not flush.
    pub fn rename(&mut self, old_title: &str, new_title: &str) -> Result<()> {
        require_non_empty(new_title, Field::Title)?;
        if new_title == old_title {
            return Ok(());
        }

        let mut staged = self.notes.clone();
        let body = staged
            .shift_remove(old_title)
            .ok_or_else(|| JotError::NotFound(old_title.to_string()))?;
        staged.insert(new_title.to_string(), body);
        self.commit(staged)?;
        info!(from = old_title, to = new_title, "note renamed");
        Ok(())
    }

    pub fn delete(&mut self, title: &str) -> Result<()> {
        let mut staged = self.notes.clone();
        if staged.shift_remove(title).is_none() {
            return Err(JotError::NotFound(title.to_string()));
        }
        self.commit(staged)?;
        info!(title, "note deleted");
        Ok(())
    }

    fn commit(&mut self, staged: Notes) -> Result<()> {
        self.backend.save(&staged)?;
        self.notes = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FsBackend;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    fn titles<B: StorageBackend>(store: &NoteStore<B>) -> Vec<String> {
        store.list_titles("")
    }

    #[test]
    fn notes_are_copies_in_insertion_order() {
        let store = StoreFixture::new()
            .with_note("Intro", "a")
            .with_note("Advanced", "b")
            .build();
        let notes: Vec<Note> = store.notes().collect();
        assert_eq!(notes, vec![Note::new("Intro", "a"), Note::new("Advanced", "b")]);
    }

    #[test]
    fn create_then_get() {
        let mut store = StoreFixture::new().build();
        store.create("Intro", "Neural nets are").unwrap();
        assert_eq!(store.get("Intro").unwrap(), "Neural nets are");
    }

    #[test]
    fn create_overwrites_same_title() {
        let mut store = StoreFixture::new().with_note("A", "old").build();
        store.create("A", "new").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("A").unwrap(), "new");
    }

    #[test]
    fn create_rejects_empty_fields() {
        let mut store = StoreFixture::new().with_note("A", "x").build();

        assert!(matches!(
            store.create("", "body"),
            Err(JotError::EmptyField(Field::Title))
        ));
        assert!(matches!(
            store.create("   ", "body"),
            Err(JotError::EmptyField(Field::Title))
        ));
        assert!(matches!(
            store.create("title", ""),
            Err(JotError::EmptyField(Field::Body))
        ));
        assert!(matches!(
            store.create("title", " \n "),
            Err(JotError::EmptyField(Field::Body))
        ));

        assert_eq!(titles(&store), vec!["A"]);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = StoreFixture::new().build();
        assert!(matches!(store.get("nope"), Err(JotError::NotFound(t)) if t == "nope"));
    }

    #[test]
    fn list_titles_filters_case_insensitively_in_insertion_order() {
        let store = StoreFixture::new()
            .with_note("Intro", "..")
            .with_note("Advanced", "..")
            .with_note("Linear", "..")
            .build();

        assert_eq!(store.list_titles("in"), vec!["Intro", "Linear"]);
        assert_eq!(store.list_titles("IN"), vec!["Intro", "Linear"]);
        assert_eq!(store.list_titles(""), vec!["Intro", "Advanced", "Linear"]);
        assert!(store.list_titles("zzz").is_empty());
    }

    #[test]
    fn update_replaces_body() {
        let mut store = StoreFixture::new().with_note("A", "x").build();
        store.update("A", "y").unwrap();
        assert_eq!(store.get("A").unwrap(), "y");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = StoreFixture::new().build();
        assert!(matches!(
            store.update("A", "y"),
            Err(JotError::NotFound(_))
        ));
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn rename_moves_body() {
        let mut store = StoreFixture::new().with_note("Intro", "text").build();
        store.rename("Intro", "Basics").unwrap();

        assert!(matches!(store.get("Intro"), Err(JotError::NotFound(_))));
        assert_eq!(store.get("Basics").unwrap(), "text");
    }

    #[test]
    fn rename_onto_existing_overwrites_it() {
        let mut store = StoreFixture::new()
            .with_note("A", "x")
            .with_note("B", "y")
            .build();
        store.rename("A", "B").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("B").unwrap(), "x");
        assert_eq!(
            store.backend().persisted().unwrap().get("B").map(String::as_str),
            Some("x")
        );
    }

    #[test]
    fn rename_to_same_title_is_a_clean_noop() {
        let mut store = StoreFixture::new().with_note("A", "x").build();
        store.rename("A", "A").unwrap();

        assert_eq!(store.get("A").unwrap(), "x");
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn rename_rejects_empty_target() {
        let mut store = StoreFixture::new().with_note("existing", "x").build();
        assert!(matches!(
            store.rename("existing", ""),
            Err(JotError::EmptyField(Field::Title))
        ));
        assert_eq!(store.get("existing").unwrap(), "x");
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn rename_missing_is_not_found() {
        let mut store = StoreFixture::new().build();
        assert!(matches!(
            store.rename("ghost", "new"),
            Err(JotError::NotFound(t)) if t == "ghost"
        ));
    }

    #[test]
    fn delete_removes_note() {
        let mut store = StoreFixture::new()
            .with_note("A", "x")
            .with_note("B", "y")
            .build();
        store.delete("A").unwrap();
        assert_eq!(titles(&store), vec!["B"]);
        assert!(matches!(store.delete("A"), Err(JotError::NotFound(_))));
    }

    #[test]
    fn failed_flush_leaves_memory_and_storage_untouched() {
        let mut store = StoreFixture::new().with_note("A", "x").build();
        store.backend().set_simulate_write_error(true);

        assert!(store.create("B", "y").unwrap_err().is_storage_failure());
        assert!(store.update("A", "changed").is_err());
        assert!(store.rename("A", "C").is_err());
        assert!(store.delete("A").is_err());

        assert_eq!(titles(&store), vec!["A"]);
        assert_eq!(store.get("A").unwrap(), "x");
        let persisted = store.backend().persisted().unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted.get("A").map(String::as_str), Some("x"));

        // Writes work again once the backend recovers
        store.backend().set_simulate_write_error(false);
        store.create("B", "y").unwrap();
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn titles_stay_unique_across_mixed_operations() {
        let mut store = StoreFixture::new().build();
        store.create("A", "1").unwrap();
        store.create("B", "2").unwrap();
        store.create("A", "3").unwrap();
        store.rename("B", "A").unwrap();
        store.create("C", "4").unwrap();
        store.rename("C", "B").unwrap();

        let all = titles(&store);
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
        assert_eq!(store.get("A").unwrap(), "2");
        assert_eq!(store.get("B").unwrap(), "4");
    }

    #[test]
    fn every_mutation_is_visible_to_a_fresh_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::load(FsBackend::new(&path)).unwrap();
        store.create("Intro", "text").unwrap();
        store.create("Other", "more").unwrap();
        store.rename("Intro", "Basics").unwrap();
        store.update("Other", "changed").unwrap();

        let reloaded = NoteStore::load(FsBackend::new(&path)).unwrap();
        assert_eq!(reloaded.list_titles(""), vec!["Other", "Basics"]);
        assert_eq!(reloaded.get("Basics").unwrap(), "text");
        assert_eq!(reloaded.get("Other").unwrap(), "changed");
    }

    #[test]
    fn noop_rename_leaves_file_bytes_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = NoteStore::load(FsBackend::new(&path)).unwrap();
        store.create("A", "x").unwrap();
        let before = std::fs::read(&path).unwrap();

        store.rename("A", "A").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn memory_backend_starts_empty() {
        let store = NoteStore::load(MemBackend::new()).unwrap();
        assert!(store.is_empty());
    }
}
