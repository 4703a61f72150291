use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    title: &str,
    body: &str,
) -> Result<CmdResult> {
    let replaced = store.contains(title);
    store.create(title, body)?;

    let message = if replaced {
        format!("Note replaced: {}", title)
    } else {
        format!("Note saved: {}", title)
    };
    Ok(CmdResult::default()
        .with_notes(vec![Note::new(title, body)])
        .with_message(CmdMessage::success(message)))
}
