use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    title: &str,
    body: &str,
) -> Result<CmdResult> {
    if store.get(title)? == body {
        return Ok(CmdResult::default()
            .with_notes(vec![Note::new(title, body)])
            .with_message(CmdMessage::info(format!("No changes: {}", title))));
    }

    store.update(title, body)?;
    Ok(CmdResult::default()
        .with_notes(vec![Note::new(title, body)])
        .with_message(CmdMessage::success(format!("Note updated: {}", title))))
}
