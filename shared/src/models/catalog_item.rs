//! Catalog item model
//!
//! A catalog item is a sellable service or a stocked product owned by a
//! provider. Numeric fields arrive from the form as strings and are
//! coerced server-side; the canonical model carries them as numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Item category — decides which field group is meaningful
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Service,
    Product,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Service => "service",
            ItemCategory::Product => "product",
        }
    }
}

impl Default for ItemCategory {
    fn default() -> Self {
        ItemCategory::Service
    }
}

/// Item visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
}

/// Canonical catalog item as stored and returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Globally unique id, assigned at creation
    pub id: String,
    pub provider_id: String,
    pub category: ItemCategory,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub status: ItemStatus,
    /// Ordered image URIs, at most 4
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Service fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub service_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_service_name: Option<String>,

    // Product fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload — numeric fields are strings, exactly as the form emits
/// them. The server validates and coerces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCreate {
    #[serde(default)]
    pub provider_id: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pre-existing image URIs (uploads travel as multipart files)
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "de_string_or_list")]
    pub service_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<String>,
}

/// Partial update payload — absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Existing URIs to keep; new uploads are appended by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_or_list")]
    pub service_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<String>,
}

// ── Flexible deserialization ────────────────────────────────────────
//
// Multipart transports serialize list fields to a JSON string
// (`"[\"tuning\",\"other\"]"`); JSON bodies send a real array. Both
// forms are accepted.

fn parse_string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrList;

    impl<'de> Visitor<'de> for StringOrList {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of strings or a JSON-encoded list")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_json::from_str(value)
                .map_err(|e| de::Error::custom(format!("invalid list string: {}", e)))
        }

        fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            Vec::<String>::deserialize(de::value::SeqAccessDeserializer::new(seq))
        }
    }

    deserializer.deserialize_any(StringOrList)
}

fn de_string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_string_or_list(deserializer)
}

fn de_opt_string_or_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "parse_string_or_list")] Vec<String>);

    Option::<Wrapper>::deserialize(deserializer).map(|opt| opt.map(|w| w.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_types_accepts_list() {
        let create: ItemCreate = serde_json::from_str(
            r#"{"category":"service","name":"Wax","price":"25","service_types":["tuning","other"]}"#,
        )
        .unwrap();
        assert_eq!(create.service_types, vec!["tuning", "other"]);
    }

    #[test]
    fn test_service_types_accepts_encoded_string() {
        let create: ItemCreate = serde_json::from_str(
            r#"{"category":"service","name":"Wax","price":"25","service_types":"[\"tuning\"]"}"#,
        )
        .unwrap();
        assert_eq!(create.service_types, vec!["tuning"]);
    }

    #[test]
    fn test_update_defaults_to_untouched() {
        let update: ItemUpdate = serde_json::from_str(r#"{"status":"inactive"}"#).unwrap();
        assert_eq!(update.status, Some(ItemStatus::Inactive));
        assert!(update.name.is_none());
        assert!(update.service_types.is_none());
    }
}
