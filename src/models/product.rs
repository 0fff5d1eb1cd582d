use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// ProductRecord: one catalog item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "de::text")]
    pub sku: String,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub display_group: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub store_qty: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub warehouse_qty: Option<i64>,
}

// ---------------------------------------------------------------------------
// ItemsPage: response of `/items`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsPage {
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub items: Vec<ProductRecord>,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub total: u64,
}
