use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{export_note, ExportFormat};
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};
use std::path::Path;

pub fn run<B: StorageBackend>(
    store: &NoteStore<B>,
    title: &str,
    format: ExportFormat,
    dir: &Path,
) -> Result<CmdResult> {
    let note = Note::new(title, store.get(title)?);
    let path = export_note(&note, format, dir)?;

    let message = CmdMessage::success(format!("Exported {}", path.display()));
    Ok(CmdResult::default()
        .with_exported(path)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotError;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn exports_existing_note() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().with_note("Intro", "text").build();
        let result = run(&store, "Intro", ExportFormat::Text, dir.path()).unwrap();

        assert_eq!(result.exported, vec![dir.path().join("Intro.txt")]);
        assert_eq!(
            std::fs::read_to_string(&result.exported[0]).unwrap(),
            "Intro\n\ntext"
        );
    }

    #[test]
    fn missing_note_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = StoreFixture::new().build();
        assert!(matches!(
            run(&store, "Intro", ExportFormat::Pdf, dir.path()),
            Err(JotError::NotFound(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
