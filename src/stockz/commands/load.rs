use crate::commands::{CmdMessage, CmdResult};
use crate::error::StockzError;
use crate::model::Inventory;
use crate::store::DataStore;
use std::path::Path;
use tracing::{debug, warn};

/// Replace `inventory` with the records stored at `path`.
///
/// Never merges: on any failure the inventory is reset to empty and the
/// failure is reported as a message.
pub fn run<S: DataStore>(store: &S, inventory: &mut Inventory, path: &Path) -> CmdResult {
    let mut result = CmdResult::default();

    match store.load(path) {
        Ok(records) => {
            let (loaded, dropped) = Inventory::from_records(records);
            for name in dropped {
                result.add_message(CmdMessage::warning(format!(
                    "Ignoring entry '{}' with no stock in {}.",
                    name,
                    path.display()
                )));
            }
            debug!(path = %path.display(), items = loaded.len(), "loaded inventory");
            *inventory = loaded;
        }
        Err(StockzError::NotFound(_)) => {
            *inventory = Inventory::new();
            result.add_message(CmdMessage::warning(format!(
                "{} not found, starting with empty inventory.",
                path.display()
            )));
        }
        Err(StockzError::Io(e)) => {
            warn!(path = %path.display(), error = %e, "data file unreadable");
            *inventory = Inventory::new();
            result.add_message(CmdMessage::error(format!(
                "Could not read {}: {}. Starting with empty inventory.",
                path.display(),
                e
            )));
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file corrupt");
            *inventory = Inventory::new();
            result.add_message(CmdMessage::error(format!(
                "Could not decode {}. File might be corrupt. Starting with empty inventory.",
                path.display()
            )));
        }
    }

    result
}
