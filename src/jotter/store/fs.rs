use super::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Notes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Stores all notes in a single pretty-printed JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(JotError::Io)?;
        }
        Ok(parent)
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Notes> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "notes file absent, starting empty");
            return Ok(Notes::new());
        }
        let content = fs::read_to_string(&self.path).map_err(JotError::Io)?;
        let notes: Notes = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save(&self, notes: &Notes) -> Result<()> {
        let dir = self.ensure_parent()?;
        let content = serde_json::to_string_pretty(notes).map_err(JotError::Serialization)?;

        // Atomic write: temp file in the same directory, then rename over the target
        let tmp_file = dir.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JotError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JotError::Io(e));
        }

        debug!(path = %self.path.display(), count = notes.len(), "flushed notes");
        Ok(())
    }
}
