use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// One inventory observation for a store on a date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySample {
    #[serde(default, deserialize_with = "de::text")]
    pub record_date: String,
    #[serde(default, deserialize_with = "de::text")]
    pub store_id: String,
    /// Raw quantity as sent by the server; see [`InventorySample::quantity`].
    #[serde(default)]
    pub store_qty: Value,
}

impl InventorySample {
    /// Quantity for charting. Unparseable values count as 0.
    pub fn quantity(&self) -> i64 {
        de::value_as_int(&self.store_qty).unwrap_or(0)
    }

    /// Quantity exactly as received, for tabular display.
    pub fn quantity_text(&self) -> String {
        de::value_as_text(&self.store_qty)
    }
}

/// Response of `/inventory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryPayload {
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub inventory: Vec<InventorySample>,
}
