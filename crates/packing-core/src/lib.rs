//! Packing List Core
//!
//! Layered like the rest of the app:
//! - entity / item: the `Item` entity and its id
//! - list: immutable `ItemList` snapshots, sorting and stats
//! - store: `ListStore`, the single owner of the current list
//!
//! Nothing here knows about rendering.

mod config;
mod entity;
mod error;
mod item;
mod list;
mod stats;
mod store;

pub use config::{ListConfig, SeedItem, DEFAULT_MAX_QUANTITY};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId, DEFAULT_QUANTITY};
pub use list::{ItemList, SortMode};
pub use stats::{DerivedStats, StatsSummary};
pub use store::{Command, ListStore};
