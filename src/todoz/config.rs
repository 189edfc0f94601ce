use crate::error::{Result, TodoError};
use crate::model::Priority;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const KEY_DEFAULT_PRIORITY: &str = "default-priority";
pub const KEY_DATE_FORMAT: &str = "date-format";

/// Configuration for todoz, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Priority given to new todos when none is specified
    #[serde(default)]
    pub default_priority: Priority,

    /// strftime pattern used to show deadlines
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            date_format: default_date_format(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    /// Look up a value by its user-facing key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DEFAULT_PRIORITY => Some(self.default_priority.to_string()),
            KEY_DATE_FORMAT => Some(self.date_format.clone()),
            _ => None,
        }
    }

    /// Set a value by its user-facing key, validating it first. Returns the
    /// value as it is now stored.
    pub fn set(&mut self, key: &str, value: &str) -> Result<String> {
        match key {
            KEY_DEFAULT_PRIORITY => {
                let n: u8 = value.trim().parse().map_err(|_| {
                    TodoError::Api(format!("Priority must be a number from 1 to 5, got {}", value))
                })?;
                self.default_priority = Priority::new(n)?;
                Ok(self.default_priority.to_string())
            }
            KEY_DATE_FORMAT => {
                if !is_valid_date_format(value) {
                    return Err(TodoError::Api(format!("Invalid date format: {:?}", value)));
                }
                self.date_format = value.to_string();
                Ok(self.date_format.clone())
            }
            other => Err(unknown_key(other)),
        }
    }

    /// All keys with their current values, in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_DEFAULT_PRIORITY, self.default_priority.to_string()),
            (KEY_DATE_FORMAT, self.date_format.clone()),
        ]
    }
}

pub fn unknown_key(key: &str) -> TodoError {
    TodoError::Api(format!("Unknown config key: {}", key))
}

/// A non-blank strftime pattern that chrono can render.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !pattern.trim().is_empty()
        && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
