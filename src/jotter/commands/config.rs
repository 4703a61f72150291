use crate::commands::{CmdMessage, CmdResult};
use crate::config::JotConfig;
use crate::error::{JotError, Result};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change settings. Setting a key over an unparseable `config.json`
/// starts from defaults, so a broken file can be repaired from the command line.
pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut config = match (JotConfig::load(data_dir), &action) {
        (Ok(config), _) => config,
        (Err(JotError::Serialization(e)), ConfigAction::Set(..)) => {
            warn!("config.json unreadable, starting from defaults: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "config.json could not be parsed ({}); other settings were reset to defaults",
                e
            )));
            JotConfig::default()
        }
        (Err(e), _) => return Err(e),
    };

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}
