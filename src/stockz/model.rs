use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fmt;

/// Item name to quantity, as read from and written to the data file.
pub type StockRecords = BTreeMap<String, u64>;

/// The in-memory stock mapping.
///
/// Every key present has a strictly positive quantity. Mutations go through
/// [`Inventory::increment`] and [`Inventory::decrement`], which never leave a
/// zero entry behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: StockRecords,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from raw records, dropping entries that would break
    /// the positive-quantity invariant. Returns the names of dropped entries.
    pub fn from_records(records: StockRecords) -> (Self, Vec<String>) {
        let mut dropped = Vec::new();
        let mut items = StockRecords::new();
        for (name, qty) in records {
            if name.is_empty() || qty == 0 {
                dropped.push(name);
            } else {
                items.insert(name, qty);
            }
        }
        (Self { items }, dropped)
    }

    pub fn records(&self) -> &StockRecords {
        &self.items
    }

    /// Quantity on hand, 0 when the item is not tracked.
    pub fn get(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_units(&self) -> u64 {
        self.items.values().fold(0u64, |acc, q| acc.saturating_add(*q))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Add `qty` units to `item`, creating it if needed. Returns the new quantity.
    pub fn increment(&mut self, item: &str, qty: u64) -> u64 {
        if qty == 0 {
            return self.get(item);
        }
        let entry = self.items.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        *entry
    }

    /// Take `qty` units from `item`.
    ///
    /// Returns `None` when the item is not tracked, otherwise the remaining
    /// quantity. A remainder of 0 means the entry was deleted.
    pub fn decrement(&mut self, item: &str, qty: u64) -> Option<u64> {
        let current = *self.items.get(item)?;
        if qty >= current {
            self.items.remove(item);
            return Some(0);
        }
        let remaining = current - qty;
        self.items.insert(item.to_string(), remaining);
        Some(remaining)
    }

    /// Names whose quantity is strictly below `threshold`, in iteration order.
    pub fn below(&self, threshold: i64) -> Vec<String> {
        if threshold <= 0 {
            return Vec::new();
        }
        let threshold = threshold as u64;
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn lines(&self) -> Vec<StockLine> {
        self.iter()
            .map(|(item, qty)| StockLine {
                item: item.to_string(),
                qty,
            })
            .collect()
    }
}

impl FromIterator<(String, u64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for (name, qty) in iter {
            if !name.is_empty() {
                inventory.increment(&name, qty);
            }
        }
        inventory
    }
}

/// One row of the items report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub item: String,
    pub qty: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Added,
    Removed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Added => write!(f, "Added"),
            Action::Removed => write!(f, "Removed"),
        }
    }
}

/// Timestamped record of a successful stock change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: DateTime<Local>,
    pub action: Action,
    pub item: String,
    pub qty: u64,
}

impl ActivityEntry {
    pub fn added(item: &str, qty: u64) -> Self {
        Self::now(Action::Added, item, qty)
    }

    pub fn removed(item: &str, qty: u64) -> Self {
        Self::now(Action::Removed, item, qty)
    }

    fn now(action: Action, item: &str, qty: u64) -> Self {
        Self {
            at: Local::now(),
            action,
            item: item.to_string(),
            qty,
        }
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} of {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.action,
            self.qty,
            self.item
        )
    }
}
