use crate::error::{JotError, Result};
use crate::suggest::{clamp_words, UnknownTokenPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";
const DEFAULT_MODEL_FILE: &str = "model.json";
const DEFAULT_WORDS: usize = 5;

/// Configuration for jotter, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Notes file, relative to the data directory unless absolute
    #[serde(default = "default_notes_file")]
    pub notes_file: PathBuf,

    /// Prediction model file, relative to the data directory unless absolute
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Where exports go. `None` means the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Words to suggest when the user does not ask for a number
    #[serde(default = "default_words")]
    pub default_words: usize,

    #[serde(default)]
    pub unknown_tokens: UnknownTokenPolicy,
}

fn default_notes_file() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_FILE)
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}

fn default_words() -> usize {
    DEFAULT_WORDS
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            model_path: default_model_path(),
            export_dir: None,
            default_words: DEFAULT_WORDS,
            unknown_tokens: UnknownTokenPolicy::default(),
        }
    }
}

/// Keys accepted by the `config` command.
pub const CONFIG_KEYS: &[&str] = &[
    "notes-file",
    "model-path",
    "export-dir",
    "default-words",
    "unknown-tokens",
];

impl JotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(JotError::Io)?;
        Ok(())
    }

    pub fn notes_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.notes_file)
    }

    pub fn model_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.model_path)
    }

    pub fn export_dir(&self, cwd: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }

    pub fn default_words(&self) -> usize {
        clamp_words(self.default_words)
    }

    /// Current value of a config key, as shown to users.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "notes-file" => self.notes_file.display().to_string(),
            "model-path" => self.model_path.display().to_string(),
            "export-dir" => self
                .export_dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| ".".to_string()),
            "default-words" => self.default_words().to_string(),
            "unknown-tokens" => self.unknown_tokens.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "notes-file" => self.notes_file = non_empty_path(key, value)?,
            "model-path" => self.model_path = non_empty_path(key, value)?,
            "export-dir" => {
                self.export_dir = if value.trim().is_empty() || value == "." {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "default-words" => {
                let n: usize = value.trim().parse().map_err(|_| {
                    JotError::Api(format!("default-words must be a number, got '{}'", value))
                })?;
                self.default_words = clamp_words(n);
            }
            "unknown-tokens" => self.unknown_tokens = value.parse()?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|v| (*key, v)))
            .collect()
    }
}

fn non_empty_path(key: &str, value: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(JotError::Api(format!("{} cannot be empty", key)));
    }
    Ok(PathBuf::from(value))
}

fn unknown_key(key: &str) -> JotError {
    JotError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
