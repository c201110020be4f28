//! # Storage Layer
//!
//! This module defines the storage abstraction for stockz. The [`DataStore`] trait
//! lets the API load and save stock records without knowing where they live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON object per data file, item name to quantity
//!   - Written in full on every save, 4-space indentation
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the encoded file text per path, so decode failures can be staged
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "apple": 7,
//!     "banana": 3
//! }
//! ```
//!
//! Both stores share [`encode_records`] and [`decode_records`], so the text an
//! `InMemoryStore` holds is byte-for-byte what a `FileStore` would write.

use crate::error::{Result, StockzError};
use crate::model::StockRecords;
use serde::Serialize;
use std::path::Path;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for stock record storage.
pub trait DataStore {
    /// Read and decode the records at `path`.
    ///
    /// Returns [`StockzError::NotFound`] when nothing exists at `path` and
    /// [`StockzError::Serialization`] when the content is not a valid record object.
    fn load(&self, path: &Path) -> Result<StockRecords>;

    /// Encode and write `records` to `path`, replacing whatever was there.
    fn save(&mut self, path: &Path, records: &StockRecords) -> Result<()>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

pub fn encode_records(records: &StockRecords) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(StockzError::Serialization)?;
    String::from_utf8(buf).map_err(|e| StockzError::Store(e.to_string()))
}

/// Bytes that are not UTF-8 fail here too, as a serialization error.
pub fn decode_records(content: &[u8]) -> Result<StockRecords> {
    serde_json::from_slice(content).map_err(StockzError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_four_space_indent() {
        let mut records = StockRecords::new();
        records.insert("apple".into(), 7);
        records.insert("banana".into(), 3);

        let text = encode_records(&records).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 3\n}");
    }

    #[test]
    fn encodes_empty_object() {
        let text = encode_records(&StockRecords::new()).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn rejects_non_object_content() {
        assert!(matches!(
            decode_records(b"{not json"),
            Err(StockzError::Serialization(_))
        ));
        assert!(matches!(
            decode_records(b"[1, 2, 3]"),
            Err(StockzError::Serialization(_))
        ));
        assert!(matches!(
            decode_records(br#"{"apple": -1}"#),
            Err(StockzError::Serialization(_))
        ));
        assert!(matches!(
            decode_records(br#"{"apple": "ten"}"#),
            Err(StockzError::Serialization(_))
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(matches!(
            decode_records(&[b'{', 0xff, 0xfe, b'}']),
            Err(StockzError::Serialization(_))
        ));
    }

    #[test]
    fn decodes_flat_object() {
        let records = decode_records(br#"{"apple": 10, "banana": 3}"#).unwrap();
        assert_eq!(records.get("apple"), Some(&10));
        assert_eq!(records.get("banana"), Some(&3));
    }
}
