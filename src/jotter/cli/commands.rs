//! # CLI Layer
//!
//! One possible UI client for jotter. This is the only place that:
//! - Knows about stdout/stderr and the terminal
//! - Parses arguments
//! - Opens the user's editor
//! - Clamps user input (word counts) before it reaches the library
//!
//! ## Structure
//!
//! - `run()`: logging setup, context setup, dispatch
//! - `handle_*()`: one handler per command; each calls the API and prints the result

use super::print::{print_full_note, print_messages, print_note_list, print_suggestion};
use super::setup::{Cli, Commands};
use clap::Parser;
use jotter::api::{CmdMessage, ConfigAction, JotApi};
use jotter::commands::config as config_cmd;
use jotter::editor::{edit_content, EditorContent};
use jotter::error::{JotError, Result};
use jotter::export::ExportFormat;
use jotter::init::{data_dir, initialize, JotContext};
use jotter::oracle::ModelOracle;
use jotter::store::fs::FsBackend;
use jotter::suggest::{clamp_words, MAX_WORDS, MIN_WORDS};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type Api = JotApi<FsBackend, ModelOracle>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = data_dir()?;

    // Config runs without loading notes or the model, so a broken
    // config.json can still be fixed with `jot config <key> <value>`.
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&data_dir, key, value);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let JotContext { mut api, config } = initialize(&data_dir, &cwd)?;

    match cli.command {
        Some(Commands::Create {
            title,
            body,
            no_editor,
        }) => handle_create(&mut api, title, join_words(&body), no_editor),
        Some(Commands::List { filter }) => handle_list(&api, filter),
        Some(Commands::View { title }) => handle_view(&api, &title),
        Some(Commands::Update {
            title,
            body,
            no_editor,
        }) => handle_update(&mut api, &title, join_words(&body), no_editor),
        Some(Commands::Rename { old, new }) => handle_rename(&mut api, &old, &new),
        Some(Commands::Delete { title }) => handle_delete(&mut api, &title),
        Some(Commands::Suggest { seed, words, save }) => handle_suggest(
            &mut api,
            &seed.join(" "),
            words.unwrap_or_else(|| config.default_words()),
            save,
        ),
        Some(Commands::Export { title, format }) => handle_export(&api, &title, format),
        Some(Commands::Config { .. }) => unreachable!("config is handled before initialization"),
        None => handle_list(&api, None),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn handle_create(
    api: &mut Api,
    title: String,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (title, body) = match body {
        Some(body) => (title, body),
        None if no_editor => (title, String::new()),
        None => {
            let edited = edit_content(&EditorContent::new(title.clone(), ""))?;
            let title = if edited.title.is_empty() {
                title
            } else {
                edited.title
            };
            (title, edited.body)
        }
    };

    let result = api.create_note(&title, &body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &Api, filter: Option<String>) -> Result<()> {
    let result = api.list_notes(filter.as_deref())?;
    print_note_list(&result.notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &Api, title: &str) -> Result<()> {
    let result = api.get_note(title)?;
    for note in &result.notes {
        print_full_note(note);
    }
    Ok(())
}

fn handle_update(
    api: &mut Api,
    title: &str,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let body = match body {
        Some(body) => body,
        None if no_editor => String::new(),
        None => {
            let current = api.get_note(title)?;
            let body = current
                .notes
                .first()
                .map(|n| n.body.clone())
                .unwrap_or_default();
            let edited = edit_content(&EditorContent::new(title, body))?;
            let (body, warning) = edited_body(title, edited);
            if let Some(warning) = warning {
                print_messages(&[warning]);
            }
            body
        }
    };

    let result = api.update_note(title, &body)?;
    print_messages(&result.messages);
    Ok(())
}

/// Update only replaces the body. A title changed in the editor is ignored, with a warning.
fn edited_body(title: &str, edited: EditorContent) -> (String, Option<CmdMessage>) {
    let warning = (edited.title != title).then(|| {
        CmdMessage::warning(format!(
            "Title changes are ignored by update; use `jot rename {} <new>`",
            title
        ))
    });
    (edited.body, warning)
}

fn handle_rename(api: &mut Api, old: &str, new: &str) -> Result<()> {
    let result = api.rename_note(old, new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut Api, title: &str) -> Result<()> {
    let result = api.delete_note(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(api: &mut Api, seed: &str, words: usize, save: Option<String>) -> Result<()> {
    let count = clamp_words(words);
    if count != words {
        print_messages(&[CmdMessage::warning(format!(
            "Word count must be between {} and {}; using {}",
            MIN_WORDS, MAX_WORDS, count
        ))]);
    }

    let result = api.suggest(seed, count)?;
    let suggestion = result
        .suggestion
        .ok_or_else(|| JotError::Api("No suggestion produced".to_string()))?;
    print_suggestion(&suggestion);
    print_messages(&result.messages);

    if let Some(title) = save {
        let saved = api.create_note(&title, &suggestion.text)?;
        print_messages(&saved.messages);
    }
    Ok(())
}

fn handle_export(api: &Api, title: &str, format: ExportFormat) -> Result<()> {
    let result = api.export(title, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = config_cmd::run(data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
