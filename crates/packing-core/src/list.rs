//! Item List Snapshots
//!
//! `ItemList` is an immutable, cheaply cloned snapshot. Every transformation
//! returns a new snapshot; when nothing changes the *same* snapshot comes
//! back, so callers can tell a no-op apart with `same_snapshot`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::item::{Item, ItemId};
use crate::stats::DerivedStats;

/// Ordered items, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    items: Arc<[Item]>,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemList {
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// True when both values are the very same snapshot, not just equal ones
    pub fn same_snapshot(a: &ItemList, b: &ItemList) -> bool {
        Arc::ptr_eq(&a.items, &b.items)
    }

    /// Append an item at the end. The caller guarantees a fresh id.
    pub fn with_item(&self, item: Item) -> ItemList {
        debug_assert!(!self.contains(item.id()), "duplicate item id {}", item.id());
        Self {
            items: self.items.iter().cloned().chain(std::iter::once(item)).collect(),
        }
    }

    /// Drop the item with `id`; unchanged if absent
    pub fn without(&self, id: ItemId) -> ItemList {
        if !self.contains(id) {
            return self.clone();
        }
        Self {
            items: self.items.iter().filter(|item| item.id() != id).cloned().collect(),
        }
    }

    /// Flip `packed` on the item with `id`; unchanged if absent
    pub fn with_toggled(&self, id: ItemId) -> ItemList {
        if !self.contains(id) {
            return self.clone();
        }
        Self {
            items: self
                .items
                .iter()
                .map(|item| if item.id() == id { item.toggled() } else { item.clone() })
                .collect(),
        }
    }

    /// Items in display order. Never touches the stored order.
    pub fn sorted_view(&self, mode: SortMode) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        match mode {
            SortMode::Input => {}
            // sort_by is stable
            SortMode::Description => view.sort_by(|a, b| compare_descriptions(&a.description, &b.description)),
            SortMode::Packed => view.sort_by_key(|item| item.packed),
        }
        log::trace!("sorted {} items by {}", view.len(), mode);
        view
    }

    /// Aggregate counts, recomputed on every call
    pub fn stats(&self) -> DerivedStats {
        DerivedStats::from_items(&self.items)
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Case-insensitive first; on a tie lowercase sorts before uppercase.
fn compare_descriptions(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Display order of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order
    #[default]
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked first
    Packed,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Input, SortMode::Description, SortMode::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    /// Label for the sort picker
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Input => "Sort by input order",
            SortMode::Description => "Sort by description",
            SortMode::Packed => "Sort by packed status",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortMode::Input),
            "description" => Ok(SortMode::Description),
            "packed" => Ok(SortMode::Packed),
            other => Err(format!("unknown sort mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, description: &str, packed: bool) -> Item {
        let mut item = Item::new(ItemId::new(id), description, 1).unwrap();
        item.packed = packed;
        item
    }

    fn list_of(items: Vec<Item>) -> ItemList {
        items.into_iter().fold(ItemList::empty(), |list, item| list.with_item(item))
    }

    fn ids(view: &[&Item]) -> Vec<u64> {
        view.iter().map(|item| item.id.get()).collect()
    }

    #[test]
    fn test_with_item_appends() {
        let list = list_of(vec![make_item(1, "A", false), make_item(2, "B", false)]);
        let next = list.with_item(make_item(3, "C", false));
        assert_eq!(list.len(), 2);
        assert_eq!(next.len(), 3);
        assert_eq!(next.as_slice()[2].description, "C");
    }

    #[test]
    fn test_without_absent_is_same_snapshot() {
        let list = list_of(vec![make_item(1, "A", false)]);
        let next = list.without(ItemId::new(99));
        assert!(ItemList::same_snapshot(&list, &next));
    }

    #[test]
    fn test_without_present() {
        let list = list_of(vec![make_item(1, "A", false), make_item(2, "B", true)]);
        let next = list.without(ItemId::new(1));
        assert_eq!(next.len(), 1);
        assert!(!next.contains(ItemId::new(1)));
        assert!(next.contains(ItemId::new(2)));
    }

    #[test]
    fn test_with_toggled_keeps_order() {
        let list = list_of(vec![make_item(1, "A", false), make_item(2, "B", false), make_item(3, "C", false)]);
        let next = list.with_toggled(ItemId::new(2));
        assert_eq!(ids(&next.sorted_view(SortMode::Input)), vec![1, 2, 3]);
        assert!(next.get(ItemId::new(2)).unwrap().packed);
        assert!(!next.get(ItemId::new(1)).unwrap().packed);
        assert!(!list.get(ItemId::new(2)).unwrap().packed);
    }

    #[test]
    fn test_with_toggled_absent_is_same_snapshot() {
        let list = list_of(vec![make_item(1, "A", false)]);
        assert!(ItemList::same_snapshot(&list, &list.with_toggled(ItemId::new(5))));
    }

    #[test]
    fn test_sort_packed_is_stable() {
        let list = list_of(vec![make_item(1, "A", false), make_item(2, "B", true), make_item(3, "C", false)]);
        assert_eq!(ids(&list.sorted_view(SortMode::Packed)), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_description() {
        let list = list_of(vec![
            make_item(1, "socks", false),
            make_item(2, "Boots", false),
            make_item(3, "passport", false),
            make_item(4, "Apple", false),
        ]);
        assert_eq!(ids(&list.sorted_view(SortMode::Description)), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_sort_description_case_tie() {
        let list = list_of(vec![make_item(1, "Hat", false), make_item(2, "hat", false), make_item(3, "Hat", false)]);
        // lowercase first, equal strings keep input order
        assert_eq!(ids(&list.sorted_view(SortMode::Description)), vec![2, 1, 3]);
    }

    #[test]
    fn test_sorted_view_does_not_mutate() {
        let list = list_of(vec![make_item(1, "Z", true), make_item(2, "A", false)]);
        let _ = list.sorted_view(SortMode::Description);
        let _ = list.sorted_view(SortMode::Packed);
        assert_eq!(ids(&list.sorted_view(SortMode::Input)), vec![1, 2]);
    }

    #[test]
    fn test_sort_mode_round_trip_str() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
        assert!("size".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortMode::Packed).unwrap(), r#""packed""#);
        let mode: SortMode = serde_json::from_str(r#""description""#).unwrap();
        assert_eq!(mode, SortMode::Description);
        assert!(serde_json::from_str::<SortMode>(r#""Packed""#).is_err());
    }
}
