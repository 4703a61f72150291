use crate::error::{JotError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The full set of notes, keyed by title, in insertion order.
pub type Notes = IndexMap<String, String>;

/// A required input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "Title"),
            Field::Body => write!(f, "Body"),
        }
    }
}

/// A single note. The title is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The body on a single line, cut to `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        self.body
            .chars()
            .take(max_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect()
    }
}

/// Rejects values that are empty once surrounding whitespace is trimmed.
pub fn require_non_empty(value: &str, field: Field) -> Result<()> {
    if value.trim().is_empty() {
        return Err(JotError::EmptyField(field));
    }
    Ok(())
}
