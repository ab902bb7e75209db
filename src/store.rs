//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! built once in `App` and passed to each component as a prop.

use leptos::prelude::*;
use reactive_stores::Store;
use packing_core::{Command, DerivedStats, Item, ItemList, ListConfig, ListStore, SortMode};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The packing list itself
    pub list: ListStore,
    /// Display order, never affects the stored list
    pub sort_by: SortMode,
    /// Quantity choices and seed items
    pub config: ListConfig,
}

impl AppState {
    pub fn new(config: ListConfig) -> Self {
        Self {
            list: ListStore::with_config(&config),
            sort_by: SortMode::default(),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a command to the list. Returns false when the list did not change
/// (blank description, unknown id).
pub fn store_dispatch(store: &AppStore, command: Command) -> bool {
    let before = store.list().read_untracked().items().clone();
    let after = store.list().write().apply(command);
    !ItemList::same_snapshot(&before, &after)
}

/// Items in the current display order
pub fn store_sorted_items(store: &AppStore) -> Vec<Item> {
    let mode = store.sort_by().get();
    store.list().read().items().sorted_view(mode).into_iter().cloned().collect()
}

pub fn store_stats(store: &AppStore) -> DerivedStats {
    store.list().read().items().stats()
}

pub fn store_sort_mode(store: &AppStore) -> SortMode {
    store.sort_by().get()
}

pub fn store_set_sort(store: &AppStore, mode: SortMode) {
    store.sort_by().set(mode);
}

pub fn store_quantity_choices(store: &AppStore) -> Vec<u32> {
    store.config().read_untracked().quantity_choices().collect()
}
