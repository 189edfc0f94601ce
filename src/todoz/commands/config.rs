use crate::commands::{CmdMessage, CmdResult, TodozPaths};
use crate::config::{unknown_key, TodozConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes `config.json`. An unknown key or a rejected value is an
/// error, and nothing is written in that case.
pub fn run(paths: &TodozPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = TodozConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            result.add_message(CmdMessage::info(value));
        }
        ConfigAction::Set(key, value) => {
            let stored = config.set(&key, &value)?;
            config.save(dir)?;
            tracing::debug!(key = %key, value = %stored, "config updated");
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
        }
    }

    Ok(result.with_config(config))
}
