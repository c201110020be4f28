use crate::commands::CmdResult;
use crate::model::Inventory;

pub fn run(inventory: &Inventory, item: &str) -> CmdResult {
    CmdResult::default().with_quantity(inventory.get(item))
}
