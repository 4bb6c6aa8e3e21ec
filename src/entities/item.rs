//! Inventory item entity type - consumable stock

use serde::{Deserialize, Serialize};

/// A stock item with a location. Unrelated to [`crate::entities::Asset`]
/// and excluded from the export pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Store-assigned identifier, immutable once persisted (0 until then)
    #[serde(default)]
    pub id: i64,

    /// Item name (required)
    pub name: String,

    /// Stock count, defaults to 0 on creation
    #[serde(default)]
    pub quantity: i64,

    /// Where the stock is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl InventoryItem {
    /// Create a new unsaved item with the creation defaults applied.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity: 0,
            location: None,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation_defaults() {
        let item = InventoryItem::new("AA batteries");
        assert_eq!(item.id, 0);
        assert_eq!(item.quantity, 0);
        assert!(item.location.is_none());
    }

    #[test]
    fn test_item_quantity_defaults_when_missing() {
        let json = r#"{"name": "cable ties"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_item_round_trip() {
        let mut item = InventoryItem::new("toner");
        item.quantity = 4;
        item.location = Some("cabinet 2".to_string());
        let json = serde_json::to_string(&item).unwrap();
        let back: InventoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
