//! Asset entity type - durable tracked items

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked asset record.
///
/// `asset_code` and `name` are required and enforced by the store at write
/// time; every other field besides `id` and `quantity` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Store-assigned identifier, immutable once persisted (0 until then)
    #[serde(default)]
    pub id: i64,

    /// Asset code (required)
    pub asset_code: String,

    /// Secondary code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<String>,

    /// Budget year the asset was purchased under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_year: Option<String>,

    /// Descriptive name (required)
    pub name: String,

    /// Free-form long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Manufacturer serial number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Unit count, defaults to 1 on creation
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// Date acquired (no time component)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<NaiveDate>,

    /// Counting unit (e.g. "pcs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Purchase price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn default_quantity() -> i64 {
    1
}

impl Asset {
    /// Create a new unsaved asset with the creation defaults applied.
    pub fn new(asset_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            asset_code: asset_code.into(),
            sub_code: None,
            budget_year: None,
            name: name.into(),
            details: None,
            serial_number: None,
            category: None,
            quantity: 1,
            acquisition_date: None,
            unit: None,
            price: None,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_creation_defaults() {
        let asset = Asset::new("A-001", "Laptop");
        assert_eq!(asset.id, 0);
        assert_eq!(asset.asset_code, "A-001");
        assert_eq!(asset.name, "Laptop");
        assert_eq!(asset.quantity, 1);
        assert!(asset.price.is_none());
        assert!(asset.acquisition_date.is_none());
    }

    #[test]
    fn test_asset_serialization_skips_empty_fields() {
        let asset = Asset::new("A-001", "Laptop");
        let json = serde_json::to_string(&asset).unwrap();
        assert!(json.contains("\"asset_code\":\"A-001\""));
        assert!(!json.contains("sub_code"));
        assert!(!json.contains("price"));
    }

    #[test]
    fn test_asset_deserialization() {
        let json = r#"{
            "id": 7,
            "asset_code": "A-042",
            "name": "Projector",
            "category": "electronics",
            "quantity": 2,
            "acquisition_date": "2024-03-15",
            "price": 599.0
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, 7);
        assert_eq!(asset.category.as_deref(), Some("electronics"));
        assert_eq!(asset.quantity, 2);
        assert_eq!(
            asset.acquisition_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
        assert_eq!(asset.price, Some(599.0));
    }

    #[test]
    fn test_asset_quantity_defaults_when_missing() {
        let json = r#"{"asset_code": "A-001", "name": "Desk"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.quantity, 1);
        assert_eq!(asset.id, 0);
    }
}
