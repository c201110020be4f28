use super::{decode_records, encode_records, DataStore};
use crate::error::{Result, StockzError};
use crate::model::StockRecords;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Stores stock records as JSON files on disk.
///
/// Paths are used as given, so relative paths resolve against the working directory.
#[derive(Debug, Default, Clone)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl DataStore for FileStore {
    fn load(&self, path: &Path) -> Result<StockRecords> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StockzError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(StockzError::Io(e)),
        };
        debug!(path = %path.display(), bytes = content.len(), "read data file");
        decode_records(&content)
    }

    fn save(&mut self, path: &Path, records: &StockRecords) -> Result<()> {
        let content = encode_records(records)?;
        fs::write(path, &content).map_err(StockzError::Io)?;
        debug!(path = %path.display(), items = records.len(), "wrote data file");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn records() -> StockRecords {
        let mut records = StockRecords::new();
        records.insert("apple".into(), 7);
        records.insert("banana".into(), 3);
        records
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        let mut store = FileStore::new();

        store.save(&path, &records()).unwrap();
        assert!(store.exists(&path));
        assert_eq!(store.load(&path).unwrap(), records());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"old": 1, "stale": 2, "gone": 3}"#).unwrap();

        let mut store = FileStore::new();
        store.save(&path, &records()).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(!on_disk.contains("stale"));
        assert!(on_disk.contains("    \"apple\": 7"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        let store = FileStore::new();

        assert!(!store.exists(&path));
        assert!(matches!(store.load(&path), Err(StockzError::NotFound(_))));
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new();
        assert!(matches!(
            store.load(&path),
            Err(StockzError::Serialization(_))
        ));
    }

    #[test]
    fn non_utf8_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let store = FileStore::new();
        assert!(matches!(
            store.load(&path),
            Err(StockzError::Serialization(_))
        ));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");

        let mut store = FileStore::new();
        assert!(matches!(
            store.save(&path, &records()),
            Err(StockzError::Io(_))
        ));
    }
}
