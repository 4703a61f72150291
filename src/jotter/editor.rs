use crate::error::{JotError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// A note as laid out in an editor buffer.
/// Format: title\n\nbody
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub body: String,
}

impl EditorContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }

    /// First non-blank line is the title, everything after it is the body.
    /// Leading blank lines of the body and trailing whitespace are dropped.
    pub fn from_buffer(buffer: &str) -> Self {
        let trimmed = buffer.trim_start();
        let (title, rest) = match trimmed.split_once('\n') {
            Some((title, rest)) => (title, rest),
            None => (trimmed, ""),
        };
        let body = rest.trim_start_matches(['\n', '\r']).trim_end();
        Self::new(title.trim(), body)
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(JotError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close and returns the file.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| JotError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(JotError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(JotError::Io)
}

/// Opens an editor pre-filled with `initial` and parses the result.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("jot-edit-{}.txt", Uuid::new_v4()));
    fs::write(&temp_file, initial.to_buffer()).map_err(JotError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_buffer() {
        let ec = EditorContent::new("My Title", "Some content here.");
        assert_eq!(ec.to_buffer(), "My Title\n\nSome content here.");
    }

    #[test]
    fn test_from_buffer_normal() {
        let ec = EditorContent::from_buffer("My Title\n\nThis is content.\nMore content.\n");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.body, "This is content.\nMore content.");
    }

    #[test]
    fn test_from_buffer_title_only() {
        let ec = EditorContent::from_buffer("My Title");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.body, "");
    }

    #[test]
    fn test_from_buffer_empty() {
        let ec = EditorContent::from_buffer("");
        assert_eq!(ec, EditorContent::new("", ""));
    }

    #[test]
    fn test_from_buffer_no_blank_separator() {
        let ec = EditorContent::from_buffer("Title\nContent without blank");
        assert_eq!(ec.title, "Title");
        assert_eq!(ec.body, "Content without blank");
    }

    #[test]
    fn test_roundtrip() {
        let original = EditorContent::new("Test Title", "Test content\nwith lines");
        assert_eq!(EditorContent::from_buffer(&original.to_buffer()), original);
    }
}
