use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    old_title: &str,
    new_title: &str,
) -> Result<CmdResult> {
    let same = old_title == new_title;
    let overwrites = !same && store.contains(new_title);
    store.rename(old_title, new_title)?;

    let mut result = CmdResult::default();
    if same {
        result.add_message(CmdMessage::info(format!(
            "Note already titled: {}",
            new_title
        )));
        return Ok(result);
    }
    if overwrites {
        result.add_message(CmdMessage::warning(format!(
            "Replaced existing note: {}",
            new_title
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Note renamed: {} -> {}",
        old_title, new_title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::JotError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renames_note() {
        let mut store = StoreFixture::new().with_note("Intro", "text").build();
        let result = run(&mut store, "Intro", "Basics").unwrap();

        assert!(matches!(store.get("Intro"), Err(JotError::NotFound(_))));
        assert_eq!(store.get("Basics").unwrap(), "text");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn warns_when_overwriting() {
        let mut store = StoreFixture::new()
            .with_note("A", "x")
            .with_note("B", "y")
            .build();
        let result = run(&mut store, "A", "B").unwrap();

        assert_eq!(store.list_titles(""), vec!["B"]);
        assert_eq!(store.get("B").unwrap(), "x");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn same_title_is_informational() {
        let mut store = StoreFixture::new().with_note("A", "x").build();
        let result = run(&mut store, "A", "A").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn empty_target_is_rejected() {
        let mut store = StoreFixture::new().with_note("existing", "x").build();
        assert!(matches!(
            run(&mut store, "existing", "  "),
            Err(JotError::EmptyField(_))
        ));
        assert_eq!(store.get("existing").unwrap(), "x");
    }
}
