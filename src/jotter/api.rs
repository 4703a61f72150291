//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every client. Each method maps to one user command:
//!
//! | method          | command               |
//! |-----------------|-----------------------|
//! | `create_note`   | `commands::create`    |
//! | `list_notes`    | `commands::list`      |
//! | `get_note`      | `commands::get`       |
//! | `update_note`   | `commands::update`    |
//! | `rename_note`   | `commands::rename`    |
//! | `delete_note`   | `commands::delete`    |
//! | `suggest`       | `commands::suggest`   |
//! | `export`        | `commands::export`    |
//! | `config`        | `commands::config`    |
//!
//! ## Dependencies Are Explicit
//!
//! `JotApi<B, O>` owns a `NoteStore<B>` and, when the model loaded, a `Suggester<O>`.
//! A missing model only disables `suggest`; every note command still works.
//!
//! The API does no business logic and no I/O of its own.

use crate::commands;
use crate::error::{JotError, Result};
use crate::export::ExportFormat;
use crate::oracle::PredictionOracle;
use crate::store::{NoteStore, StorageBackend};
use crate::suggest::Suggester;
use std::path::PathBuf;

/// Directories the API needs outside the note store.
#[derive(Debug, Clone)]
pub struct JotPaths {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
}

pub struct JotApi<B: StorageBackend, O: PredictionOracle> {
    store: NoteStore<B>,
    suggester: std::result::Result<Suggester<O>, String>,
    paths: JotPaths,
}

impl<B: StorageBackend, O: PredictionOracle> JotApi<B, O> {
    pub fn new(store: NoteStore<B>, suggester: Suggester<O>, paths: JotPaths) -> Self {
        Self {
            store,
            suggester: Ok(suggester),
            paths,
        }
    }

    /// An API whose suggestion feature is off. `reason` is reported by `suggest`.
    pub fn without_suggester(
        store: NoteStore<B>,
        reason: impl Into<String>,
        paths: JotPaths,
    ) -> Self {
        Self {
            store,
            suggester: Err(reason.into()),
            paths,
        }
    }

    pub fn create_note(&mut self, title: &str, body: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, body)
    }

    pub fn list_notes(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_note(&self, title: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, title)
    }

    pub fn update_note(&mut self, title: &str, body: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, title, body)
    }

    pub fn rename_note(
        &mut self,
        old_title: &str,
        new_title: &str,
    ) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, old_title, new_title)
    }

    pub fn delete_note(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn suggest(&self, seed: &str, count: usize) -> Result<commands::CmdResult> {
        match &self.suggester {
            Ok(suggester) => commands::suggest::run(suggester, seed, count),
            Err(reason) => Err(JotError::OracleUnavailable(reason.clone())),
        }
    }

    pub fn export(&self, title: &str, format: ExportFormat) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, title, format, &self.paths.export_dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn suggestions_enabled(&self) -> bool {
        self.suggester.is_ok()
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &JotPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
