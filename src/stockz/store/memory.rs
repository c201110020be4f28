use super::{decode_records, encode_records, DataStore};
use crate::error::{Result, StockzError};
use crate::model::StockRecords;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage raw file text at `path`, valid or not.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// The encoded text last saved at `path`.
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<StockRecords> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| StockzError::NotFound(path.to_path_buf()))?;
        decode_records(content.as_bytes())
    }

    fn save(&mut self, path: &Path, records: &StockRecords) -> Result<()> {
        let content = encode_records(records)?;
        self.files.insert(path.to_path_buf(), content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

// --- Test Fixtures ---
