//! # Storage Layer
//!
//! Notes live in one flat JSON object mapping titles to bodies:
//!
//! ```text
//! {
//!   "Intro": "Neural nets are",
//!   "Linear": "y = Wx + b"
//! }
//! ```
//!
//! The layer is split in two:
//!
//! - [`StorageBackend`]: the "how". Reads and writes the whole mapping.
//!   [`fs::FsBackend`] is the production file backend, [`memory::MemBackend`]
//!   keeps everything in memory for tests.
//! - [`NoteStore`]: the "what". Owns the in-memory mapping, enforces the note
//!   rules and flushes through the backend after every mutation.
//!
//! Only one process is expected to write a given notes file at a time; there is
//! no file locking.

use crate::error::Result;
use crate::model::Notes;

pub mod fs;
pub mod memory;
mod note_store;

pub use note_store::NoteStore;

/// Raw persistence for the full note mapping.
pub trait StorageBackend {
    /// Load the whole mapping. Absent storage is an empty mapping, not an error.
    fn load(&self) -> Result<Notes>;

    /// Replace the durable mapping.
    /// MUST be atomic: either the new mapping is stored or the old one is left intact.
    fn save(&self, notes: &Notes) -> Result<()>;
}
