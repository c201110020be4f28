use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ActivityEntry, Inventory};
use tracing::debug;

pub fn run(inventory: &mut Inventory, item: &str, qty: i64) -> CmdResult {
    if qty <= 0 {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "Cannot add zero or negative quantity ({}) for {}. Skipping.",
            qty, item
        )));
    }

    if item.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::warning("Cannot add item with no name. Skipping."));
    }

    let qty = qty as u64;
    let total = inventory.increment(item, qty);
    debug!(item, qty, total, "added stock");

    CmdResult::default().with_activity(ActivityEntry::added(item, qty))
}
