use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &NoteStore<B>, title: &str) -> Result<CmdResult> {
    let body = store.get(title)?;
    Ok(CmdResult::default().with_notes(vec![Note::new(title, body)]))
}
