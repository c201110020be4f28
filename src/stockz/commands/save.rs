use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Inventory;
use crate::store::DataStore;
use std::path::Path;

/// Write the whole inventory to `path`. Write failures are returned, not reported.
pub fn run<S: DataStore>(store: &mut S, inventory: &Inventory, path: &Path) -> Result<CmdResult> {
    store.save(path, inventory.records())?;
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, load, remove};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn round_trips_through_load() {
        let mut store = InMemoryStore::new();
        let path = Path::new("inventory.json");
        let mut inv = Inventory::new();
        add::run(&mut inv, "apple", 10);
        add::run(&mut inv, "banana", 3);
        remove::run(&mut inv, "apple", 3);

        run(&mut store, &inv, path).unwrap();

        let mut reloaded = Inventory::new();
        let result = load::run(&store, &mut reloaded, path);
        assert!(result.messages.is_empty());
        assert_eq!(reloaded, inv);
    }

    #[test]
    fn writes_indented_json() {
        let mut store = InMemoryStore::new();
        let path = Path::new("inventory.json");
        let inv: Inventory = [("apple".to_string(), 7)].into_iter().collect();

        run(&mut store, &inv, path).unwrap();

        assert_eq!(store.contents(path), Some("{\n    \"apple\": 7\n}"));
    }

    #[test]
    fn saving_empty_inventory_writes_empty_object() {
        let mut store = InMemoryStore::new().with_file("inventory.json", r#"{"old": 4}"#);
        let path = Path::new("inventory.json");

        run(&mut store, &Inventory::new(), path).unwrap();

        assert_eq!(store.contents(path), Some("{}"));
    }
}
