use crate::api::{JotApi, JotPaths};
use crate::config::JotConfig;
use crate::error::{JotError, Result};
use crate::oracle::ModelOracle;
use crate::store::fs::FsBackend;
use crate::store::NoteStore;
use crate::suggest::Suggester;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory (notes, config, model).
pub const HOME_ENV: &str = "JOT_HOME";

pub struct JotContext {
    pub api: JotApi<FsBackend, ModelOracle>,
    pub config: JotConfig,
}

/// `$JOT_HOME` if set, otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "jotter", "jotter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JotError::Api("Could not determine data directory".to_string()))
}

/// Load config and notes, and try to load the prediction model.
///
/// An unreadable notes file is fatal. An unusable model is not: the API comes
/// back with suggestions disabled.
pub fn initialize(data_dir: &Path, cwd: &Path) -> Result<JotContext> {
    let config = JotConfig::load(data_dir)?;
    let backend = FsBackend::new(config.notes_path(data_dir));
    debug!(data_dir = %data_dir.display(), notes = %backend.path().display(), "initializing");

    let store = NoteStore::load(backend)?;
    let paths = JotPaths {
        data_dir: data_dir.to_path_buf(),
        export_dir: config.export_dir(cwd),
    };

    let api = match ModelOracle::load(config.model_path(data_dir)) {
        Ok(oracle) => {
            let suggester = Suggester::new(oracle).with_policy(config.unknown_tokens);
            debug!(unknown_tokens = %suggester.policy(), "suggestions enabled");
            JotApi::new(store, suggester, paths)
        }
        Err(e) => {
            warn!("suggestions disabled: {}", e);
            JotApi::without_suggester(store, e.to_string(), paths)
        }
    };

    Ok(JotContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MODEL: &str = r#"{"max_len": 1, "vocab_size": 3,
        "index_word": {"1": "hello", "2": "world"},
        "contexts": {"1": {"2": 1.0}, "": {"1": 1.0}}}"#;

    #[test]
    fn fresh_dir_starts_empty_without_model() {
        let data = TempDir::new().unwrap();
        let ctx = initialize(data.path(), data.path()).unwrap();

        assert!(ctx.api.store().is_empty());
        assert!(!ctx.api.suggestions_enabled());
        assert_eq!(ctx.config, JotConfig::default());
    }

    #[test]
    fn loads_model_and_notes() {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("model.json"), MODEL).unwrap();
        fs::write(data.path().join("notes.json"), r#"{"A": "x"}"#).unwrap();

        let ctx = initialize(data.path(), data.path()).unwrap();
        assert!(ctx.api.suggestions_enabled());
        assert_eq!(ctx.api.store().get("A").unwrap(), "x");

        let result = ctx.api.suggest("hello", 2).unwrap();
        assert_eq!(result.suggestion.unwrap().text, "hello world hello");
    }

    #[test]
    fn corrupt_notes_file_is_fatal() {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("notes.json"), "[").unwrap();
        assert!(initialize(data.path(), data.path()).is_err());
    }

    #[test]
    fn export_dir_follows_config() {
        let data = TempDir::new().unwrap();
        let mut config = JotConfig::default();
        config.set("export-dir", "out").unwrap();
        config.save(data.path()).unwrap();

        let ctx = initialize(data.path(), Path::new("/work")).unwrap();
        assert_eq!(ctx.api.paths().export_dir, PathBuf::from("/work/out"));
    }
}
