use super::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Notes;
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since jotter is single-threaded,
/// so `StorageBackend` can take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Option<Notes>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `notes`, as if a previous run saved them.
    pub fn with_notes(notes: Notes) -> Self {
        Self {
            notes: RefCell::new(Some(notes)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// What a fresh load would return right now.
    pub fn persisted(&self) -> Option<Notes> {
        self.notes.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Notes> {
        Ok(self.notes.borrow().clone().unwrap_or_default())
    }

    fn save(&self, notes: &Notes) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(JotError::Io(io::Error::other("Simulated write error")));
        }
        *self.notes.borrow_mut() = Some(notes.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::NoteStore;

    /// Builds a `NoteStore<MemBackend>` with notes already persisted.
    #[derive(Default)]
    pub struct StoreFixture {
        notes: Notes,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_note(mut self, title: &str, body: &str) -> Self {
            self.notes.insert(title.to_string(), body.to_string());
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.notes
                    .insert(format!("Note {}", i + 1), format!("Body of note {}", i + 1));
            }
            self
        }

        pub fn build(self) -> NoteStore<MemBackend> {
            NoteStore::load(MemBackend::with_notes(self.notes))
                .expect("memory backend never fails to load")
        }
    }
}
