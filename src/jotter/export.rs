//! # Export
//!
//! Writes a single note to a standalone file named after its title. Both formats
//! hold the same text: the title, a blank line, then the body.
//!
//! - `Text`: `<title>.txt`, UTF-8.
//! - `Pdf`: `<title>.pdf`, A4 pages, Helvetica 12pt, word-wrapped.

use crate::error::{JotError, Result};
use crate::model::Note;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;
use unicode_width::UnicodeWidthChar;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;
/// Columns of 12pt Helvetica that fit between the margins.
const WRAP_COLUMNS: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(JotError::Api(format!(
                "Unknown export format '{}' (expected txt or pdf)",
                other
            ))),
        }
    }
}

/// Write `note` into `dir` and return the path of the new file.
pub fn export_note(note: &Note, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(JotError::Io)?;
    }
    let path = dir.join(file_name(&note.title, format));

    let bytes = match format {
        ExportFormat::Text => render_text(&note.title, &note.body).into_bytes(),
        ExportFormat::Pdf => render_pdf(&note.title, &note.body)?,
    };
    fs::write(&path, bytes).map_err(JotError::Io)?;

    info!(title = %note.title, path = %path.display(), "note exported");
    Ok(path)
}

pub fn file_name(title: &str, format: ExportFormat) -> String {
    let stem = sanitize_filename(title);
    let stem = if stem.is_empty() { "note".to_string() } else { stem };
    format!("{}.{}", stem, format.extension())
}

pub fn render_text(title: &str, body: &str) -> String {
    format!("{}\n\n{}", title, body)
}

pub fn render_pdf(title: &str, body: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| JotError::Export(e.to_string()))?;

    let lines = wrap_text(&render_text(title, body), WRAP_COLUMNS);
    let top = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
    let lines_per_page = ((top - MARGIN_MM) / LINE_HEIGHT_MM) as usize + 1;

    let mut current = doc.get_page(page).get_layer(layer);
    for (i, line) in lines.iter().enumerate() {
        let row = i % lines_per_page;
        if i > 0 && row == 0 {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current = doc.get_page(next_page).get_layer(next_layer);
        }
        if line.is_empty() {
            continue;
        }
        let y = top - row as f32 * LINE_HEIGHT_MM;
        current.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
    }

    doc.save_to_bytes()
        .map_err(|e| JotError::Export(e.to_string()))
}

/// Greedy word wrap by display width. Words wider than `columns` are split.
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        let mut width = 0;

        for word in raw_line.split_whitespace() {
            let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
            let needed = if line.is_empty() { word_width } else { width + 1 + word_width };

            if needed <= columns {
                if !line.is_empty() {
                    line.push(' ');
                    width += 1;
                }
                line.push_str(word);
                width += word_width;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                width = 0;
            }
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if width + w > columns {
                    out.push(std::mem::take(&mut line));
                    width = 0;
                }
                line.push(c);
                width += w;
            }
        }
        out.push(line);
    }

    out
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
