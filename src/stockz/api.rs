//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all stockz operations, whatever the UI.
//!
//! `StockzApi` owns the [`Inventory`] for its lifetime. There is no process-wide
//! mapping: two `StockzApi` values are two independent stores.
//!
//! ## Generic Over DataStore
//!
//! `StockzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StockzApi<FileStore>`
//! - Testing: `StockzApi<InMemoryStore>`
//!
//! ## Return Types
//!
//! Mutations and loads return a [`CmdResult`] carrying messages and activity
//! entries. Only `save_data` and `config` can fail, and only on I/O.
//! Queries return plain values.

use crate::commands;
use crate::error::Result;
use crate::input::RawInput;
use crate::model::Inventory;
use crate::store::DataStore;
use serde_json::Value;
use std::path::Path;

/// The main API facade for stockz operations.
pub struct StockzApi<S: DataStore> {
    store: S,
    inventory: Inventory,
    paths: commands::StockzPaths,
}

impl<S: DataStore> StockzApi<S> {
    /// Starts with an empty inventory; call [`StockzApi::load`] to read the data file.
    pub fn new(store: S, paths: commands::StockzPaths) -> Self {
        Self {
            store,
            inventory: Inventory::new(),
            paths,
        }
    }

    pub fn add_item(&mut self, item: &str, qty: i64) -> commands::CmdResult {
        commands::add::run(&mut self.inventory, item, qty)
    }

    pub fn remove_item(&mut self, item: &str, qty: i64) -> commands::CmdResult {
        commands::remove::run(&mut self.inventory, item, qty)
    }

    /// Add from loosely typed values, skipping with an error message on a type mismatch.
    pub fn add_raw(&mut self, item: &Value, qty: &Value) -> commands::CmdResult {
        match RawInput::from_values(item, qty) {
            Ok(input) => self.add_item(&input.item, input.qty),
            Err(invalid) => commands::CmdResult::default().with_message(invalid.message()),
        }
    }

    pub fn remove_raw(&mut self, item: &Value, qty: &Value) -> commands::CmdResult {
        match RawInput::from_values(item, qty) {
            Ok(input) => self.remove_item(&input.item, input.qty),
            Err(invalid) => commands::CmdResult::default().with_message(invalid.message()),
        }
    }

    pub fn get_qty(&self, item: &str) -> u64 {
        commands::qty::run(&self.inventory, item)
            .quantity
            .unwrap_or(0)
    }

    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        commands::low::run(&self.inventory, threshold).low_items
    }

    /// Replace the inventory with the contents of `path`.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> commands::CmdResult {
        commands::load::run(&self.store, &mut self.inventory, path.as_ref())
    }

    pub fn save_data(&mut self, path: impl AsRef<Path>) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.inventory, path.as_ref())
    }

    /// Load from the configured data file.
    pub fn load(&mut self) -> commands::CmdResult {
        commands::load::run(&self.store, &mut self.inventory, self.paths.data_file())
    }

    /// Save to the configured data file.
    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.inventory, self.paths.data_file())
    }

    pub fn report(&self) -> commands::CmdResult {
        commands::report::run(&self.inventory)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::low::DEFAULT_THRESHOLD;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StockzPaths};
