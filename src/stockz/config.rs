use crate::error::{Result, StockzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "stockz.json";
const DEFAULT_DATA_FILE: &str = "inventory.json";
const DEFAULT_LOW_THRESHOLD: i64 = 5;

/// Configuration for stockz, stored in stockz.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockzConfig {
    /// Data file used when no path is given on the command line
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Items with fewer units than this are reported as low
    #[serde(default = "default_low_threshold")]
    pub low_threshold: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_low_threshold() -> i64 {
    DEFAULT_LOW_THRESHOLD
}

impl Default for StockzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            low_threshold: default_low_threshold(),
        }
    }
}

impl StockzConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "low-threshold"];

    /// Read `stockz.json` from `dir`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match fs::read(dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StockzError::Serialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StockzError::Io(e)),
        }
    }

    /// Write `stockz.json` into `dir`, which must already exist.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let content = serde_json::to_vec_pretty(self).map_err(StockzError::Serialization)?;
        fs::write(dir.as_ref().join(CONFIG_FILENAME), content).map_err(StockzError::Io)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "low-threshold" => Some(self.low_threshold.to_string()),
            _ => None,
        }
    }

    /// Parse and apply `value` for `key`. Returns the value as `get` shows it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<String, String> {
        match key {
            "data-file" if value.trim().is_empty() => Err("data-file cannot be empty".to_string()),
            "data-file" => {
                self.data_file = value.to_string();
                Ok(self.data_file.clone())
            }
            "low-threshold" => {
                let threshold: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid low-threshold: {}", value))?;
                self.low_threshold = threshold;
                Ok(threshold.to_string())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
