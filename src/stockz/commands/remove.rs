use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ActivityEntry, Inventory};
use tracing::debug;

pub fn run(inventory: &mut Inventory, item: &str, qty: i64) -> CmdResult {
    if qty <= 0 {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "Cannot remove zero or negative quantity ({}) for {}. Skipping.",
            qty, item
        )));
    }

    let qty = qty as u64;
    match inventory.decrement(item, qty) {
        None => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Item '{}' not found, cannot remove.",
            item
        ))),
        Some(remaining) => {
            debug!(item, qty, remaining, "removed stock");
            CmdResult::default().with_activity(ActivityEntry::removed(item, qty))
        }
    }
}
