use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockzError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StockzError>;
