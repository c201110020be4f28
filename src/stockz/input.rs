//! # Input Boundary
//!
//! The typed API takes `&str` names and `i64` quantities, so a mismatched type
//! cannot reach it. Loosely typed input (JSON values from a script, raw strings
//! from the shell) is checked here first. A value that fails the check turns
//! into an error message and the operation is skipped; it never becomes an `Err`.

use crate::commands::CmdMessage;
use serde_json::Value;

/// An item/quantity pair that passed the type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub item: String,
    pub qty: i64,
}

/// Describes what was received when the type check fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub item_kind: &'static str,
    pub qty_kind: &'static str,
}

impl InvalidInput {
    pub fn message(&self) -> CmdMessage {
        CmdMessage::error(format!(
            "Invalid types for item ({}) or qty ({}). Skipping.",
            self.item_kind, self.qty_kind
        ))
    }
}

impl RawInput {
    /// Item must be a JSON string and qty a JSON integer that fits in `i64`.
    pub fn from_values(item: &Value, qty: &Value) -> Result<Self, InvalidInput> {
        match (item.as_str(), qty.as_i64()) {
            (Some(item), Some(qty)) => Ok(Self {
                item: item.to_string(),
                qty,
            }),
            _ => Err(InvalidInput {
                item_kind: kind_of(item),
                qty_kind: kind_of(qty),
            }),
        }
    }

    /// Shell arguments are always text; only the quantity needs parsing.
    pub fn from_args(item: &str, qty: &str) -> Result<Self, InvalidInput> {
        qty.trim()
            .parse::<i64>()
            .map(|qty| Self {
                item: item.to_string(),
                qty,
            })
            .map_err(|_| InvalidInput {
                item_kind: "string",
                qty_kind: "non-integer string",
            })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
