use crate::config::StockzConfig;
use crate::model::{ActivityEntry, StockLine};
use std::path::{Path, PathBuf};

pub mod add;
pub mod config;
pub mod load;
pub mod low;
pub mod qty;
pub mod remove;
pub mod report;
pub mod save;

#[derive(Debug, Clone)]
pub struct StockzPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

impl StockzPaths {
    pub fn new(config_dir: impl Into<PathBuf>, data_file: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub activity: Vec<ActivityEntry>,
    pub listed_items: Vec<StockLine>,
    pub low_items: Vec<String>,
    pub quantity: Option<u64>,
    pub config: Option<StockzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_activity(mut self, entry: ActivityEntry) -> Self {
        self.activity.push(entry);
        self
    }

    pub fn with_listed_items(mut self, items: Vec<StockLine>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_low_items(mut self, items: Vec<String>) -> Self {
        self.low_items = items;
        self
    }

    pub fn with_quantity(mut self, qty: u64) -> Self {
        self.quantity = Some(qty);
        self
    }

    pub fn with_config(mut self, config: StockzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
