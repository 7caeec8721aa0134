use crate::error::{Result, TrackError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_UNDO_WINDOW_SECS: u64 = 10;
const MAX_UNDO_WINDOW_SECS: u64 = 86_400;

/// Configuration for jobtrack, stored next to the record blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackConfig {
    /// Seconds a deletion stays undoable.
    #[serde(default = "default_undo_window_secs")]
    pub undo_window_secs: u64,
}

fn default_undo_window_secs() -> u64 {
    DEFAULT_UNDO_WINDOW_SECS
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            undo_window_secs: DEFAULT_UNDO_WINDOW_SECS,
        }
    }
}

impl TrackConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackError::StorageUnavailable)?;
        let config: TrackConfig =
            serde_json::from_str(&content).map_err(TrackError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrackError::StorageUnavailable)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TrackError::Serialization)?;
        fs::write(config_path, content).map_err(TrackError::StorageUnavailable)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "undo-window-secs" => Some(self.undo_window_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "undo-window-secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("undo-window-secs must be a number, got '{}'", value))?;
                if secs == 0 {
                    return Err("undo-window-secs must be positive".to_string());
                }
                if secs > MAX_UNDO_WINDOW_SECS {
                    return Err(format!(
                        "undo-window-secs must be at most {}",
                        MAX_UNDO_WINDOW_SECS
                    ));
                }
                self.undo_window_secs = secs;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo_window_secs)
    }
}
