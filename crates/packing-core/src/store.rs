//! List Store
//!
//! `ListStore` is the one owner of the current `ItemList`. The UI sends it
//! `Command`s; every command produces the next snapshot.

use crate::config::ListConfig;
use crate::error::DomainResult;
use crate::item::{Item, ItemId};
use crate::list::ItemList;

/// A state change requested by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String, quantity: u32 },
    Remove(ItemId),
    Toggle(ItemId),
    Clear,
}

#[derive(Debug, Clone)]
pub struct ListStore {
    items: ItemList,
    /// Next id to hand out. Only ever grows, so ids survive `clear`.
    next_id: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    pub fn new() -> Self {
        Self {
            items: ItemList::empty(),
            next_id: 1,
        }
    }

    /// Store pre-filled with the config's seed items
    pub fn with_config(config: &ListConfig) -> Self {
        let mut store = Self::new();
        for seed in &config.seed_items {
            match store.try_add(&seed.description, seed.quantity) {
                Ok(items) => {
                    if let (true, Some(item)) = (seed.packed, items.as_slice().last()) {
                        store.toggle(item.id);
                    }
                }
                Err(e) => log::warn!("skipping seed item {:?}: {}", seed.description, e),
            }
        }
        store
    }

    /// Current snapshot
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn apply(&mut self, command: Command) -> ItemList {
        log::debug!("apply {:?}", command);
        match command {
            Command::Add { description, quantity } => self.add(&description, quantity),
            Command::Remove(id) => self.remove(id),
            Command::Toggle(id) => self.toggle(id),
            Command::Clear => self.clear(),
        }
    }

    /// Append a new item. A blank description leaves the list unchanged.
    pub fn add(&mut self, description: &str, quantity: u32) -> ItemList {
        match self.try_add(description, quantity) {
            Ok(items) => items,
            Err(e) => {
                log::debug!("add rejected: {}", e);
                self.items.clone()
            }
        }
    }

    pub fn try_add(&mut self, description: &str, quantity: u32) -> DomainResult<ItemList> {
        let item = Item::new(ItemId::new(self.next_id), description, quantity)?;
        self.next_id += 1;
        self.items = self.items.with_item(item);
        Ok(self.items.clone())
    }

    pub fn remove(&mut self, id: ItemId) -> ItemList {
        self.items = self.items.without(id);
        self.items.clone()
    }

    pub fn toggle(&mut self, id: ItemId) -> ItemList {
        self.items = self.items.with_toggled(id);
        self.items.clone()
    }

    pub fn clear(&mut self) -> ItemList {
        self.items = ItemList::empty();
        self.items.clone()
    }
}
