use clap::{Parser, Subcommand};
use jotter::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "jot", version)]
#[command(about = "Take notes, with next-word suggestions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a note (opens the editor when no body is given)
    #[command(alias = "n")]
    Create {
        /// Title of the note
        title: String,

        /// Body of the note
        #[arg(num_args = 0..)]
        body: Vec<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes, optionally filtered by title
    #[command(alias = "ls")]
    List {
        /// Case-insensitive title filter
        filter: Option<String>,
    },

    /// Show a note
    #[command(alias = "v")]
    View { title: String },

    /// Replace a note's body (opens the editor when no body is given)
    #[command(alias = "e")]
    Update {
        title: String,

        /// New body
        #[arg(num_args = 0..)]
        body: Vec<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Rename a note (replaces any note already using the new title)
    #[command(alias = "mv")]
    Rename { old: String, new: String },

    /// Delete a note
    #[command(alias = "rm")]
    Delete { title: String },

    /// Suggest the next words after a seed text
    #[command(alias = "s")]
    Suggest {
        /// Seed text
        #[arg(required = true, num_args = 1..)]
        seed: Vec<String>,

        /// How many words to predict (1-20)
        #[arg(short = 'n', long)]
        words: Option<usize>,

        /// Save the suggestion as a note with this title
        #[arg(long, value_name = "TITLE")]
        save: Option<String>,
    },

    /// Export a note to a text or PDF file
    Export {
        title: String,

        /// txt or pdf
        #[arg(short, long, default_value = "txt")]
        format: ExportFormat,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-words)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
