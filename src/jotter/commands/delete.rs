use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, title: &str) -> Result<CmdResult> {
    store.delete(title)?;
    Ok(CmdResult::default().with_message(CmdMessage::warning(format!("Note deleted: {}", title))))
}
