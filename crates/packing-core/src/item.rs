//! Item Entity
//!
//! A single packing-list entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Quantity used when none (or zero) is given
pub const DEFAULT_QUANTITY: u32 = 1;

/// Opaque item identifier, handed out by `ListStore` and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A packing-list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to pack (trimmed, never empty)
    pub description: String,
    /// How many
    pub quantity: u32,
    /// Already in the bag?
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item.
    ///
    /// Fails when the description is blank. A zero quantity becomes
    /// `DEFAULT_QUANTITY`.
    pub fn new(id: ItemId, description: &str, quantity: u32) -> DomainResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        Ok(Self {
            id,
            description: description.to_string(),
            quantity: if quantity == 0 { DEFAULT_QUANTITY } else { quantity },
            packed: false,
        })
    }

    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
