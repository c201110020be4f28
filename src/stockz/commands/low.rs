use crate::commands::CmdResult;
use crate::model::Inventory;

pub const DEFAULT_THRESHOLD: i64 = 5;

pub fn run(inventory: &Inventory, threshold: i64) -> CmdResult {
    CmdResult::default().with_low_items(inventory.below(threshold))
}
