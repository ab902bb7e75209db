//! List Configuration
//!
//! Quantity choices offered by the form and optional starting items.
//!
//! The app itself starts from `ListConfig::default()` (empty list). Embedders
//! that want a pre-filled list load one with `ListConfig::from_json` and hand
//! it to `ListStore::with_config`.

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};
use crate::item::DEFAULT_QUANTITY;

pub const DEFAULT_MAX_QUANTITY: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Upper bound of the quantity picker (inclusive)
    pub max_quantity: u32,
    /// Items present when the store is built
    pub seed_items: Vec<SeedItem>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
            seed_items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedItem {
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub packed: bool,
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

impl ListConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: ListConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.max_quantity < 1 {
            return Err(DomainError::InvalidQuantityRange(self.max_quantity));
        }
        Ok(())
    }

    pub fn quantity_choices(&self) -> RangeInclusive<u32> {
        1..=self.max_quantity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ListConfig::default();
        assert_eq!(config.quantity_choices(), 1..=20);
        assert!(config.seed_items.is_empty());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ListConfig::from_json("{}").unwrap();
        assert_eq!(config, ListConfig::default());
    }

    #[test]
    fn test_seed_items_parse() {
        let config = ListConfig::from_json(
            r#"{
                "max_quantity": 12,
                "seed_items": [
                    { "description": "Passports", "quantity": 2, "packed": true },
                    { "description": "Sleeping Bag" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.quantity_choices(), 1..=12);
        assert_eq!(config.seed_items.len(), 2);
        assert!(config.seed_items[0].packed);
        assert_eq!(config.seed_items[1].quantity, 1);
        assert!(!config.seed_items[1].packed);
    }

    #[test]
    fn test_zero_max_quantity_rejected() {
        let err = ListConfig::from_json(r#"{ "max_quantity": 0 }"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantityRange(0)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ListConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfig(_)));
    }
}
