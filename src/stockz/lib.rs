//! # Stockz Architecture
//!
//! Stockz is a small inventory tracker: a mapping from item name to quantity,
//! persisted as a single JSON file. Like most tools of this shape it is a library
//! with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the demo, formats output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, input.rs)                               │
//! │  - Owns the Inventory, dispatches to commands               │
//! │  - Checks loosely typed input before it reaches commands    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Bad input, missing items, a missing data file and a corrupt data file are all
//! non-fatal: the operation is skipped (or the inventory reset) and a
//! [`commands::CmdMessage`] explains why. Only a failed write comes back as
//! an [`error::StockzError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`input`]: Type checks for loosely typed item/qty values
//! - [`model`]: `Inventory`, `StockLine`, `ActivityEntry`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `stockz.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
