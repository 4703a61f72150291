use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

/// Notes whose title contains `filter` (case-insensitive), in insertion order.
pub fn run<B: StorageBackend>(store: &NoteStore<B>, filter: Option<&str>) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No notes available. Create one first!")));
    }

    let notes: Vec<Note> = store
        .list_titles(filter.unwrap_or(""))
        .into_iter()
        .map(|title| {
            let body = store.get(&title)?;
            Ok(Note::new(title, body))
        })
        .collect::<Result<_>>()?;

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("No matching notes found."));
    }
    Ok(result.with_notes(notes))
}
