use colored::Colorize;
use jotter::api::{CmdMessage, MessageLevel};
use jotter::model::Note;
use jotter::suggest::Suggestion;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_note_list(notes: &[Note]) {
    for note in notes {
        println!("{}", note_line(note));
    }
}

/// `  Title  body preview…`, cut to the line width.
fn note_line(note: &Note) -> String {
    let title_width = note.title.width();
    let available = LINE_WIDTH.saturating_sub(INDENT.len() + title_width + 2);
    let preview = truncate_to_width(&note.preview(LINE_WIDTH), available);

    if preview.is_empty() {
        format!("{}{}", INDENT, note.title.bold())
    } else {
        format!("{}{}  {}", INDENT, note.title.bold(), preview.dimmed())
    }
}

pub(super) fn print_full_note(note: &Note) {
    println!("{}", note.title.bold());
    println!("--------------------------------");
    println!("{}", note.body);
}

pub(super) fn print_suggestion(suggestion: &Suggestion) {
    println!("{}", "Here's a suggestion:".green());
    let tail = suggestion.text.strip_prefix(suggestion.seed.as_str()).unwrap_or("");
    println!("{}{}", suggestion.seed, tail.bold().cyan());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn note_line_fits_the_width() {
        colored::control::set_override(false);
        let note = Note::new("Title", "x".repeat(300));
        assert!(note_line(&note).width() <= LINE_WIDTH);
    }
}
