use crate::commands::CmdResult;
use crate::model::Inventory;

pub fn run(inventory: &Inventory) -> CmdResult {
    CmdResult::default().with_listed_items(inventory.lines())
}
