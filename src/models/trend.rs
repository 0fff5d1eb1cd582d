use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// TrendRecord: server-computed inventory delta for one SKU
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    #[serde(default, deserialize_with = "de::text")]
    pub sku: String,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub display_group: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub price: Option<f64>,
    /// Signed quantity delta. Missing or unparseable counts as no change.
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub change_percent: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub previous_qty: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub current_qty: Option<i64>,
}

impl TrendRecord {
    pub fn delta(&self) -> f64 {
        self.change.unwrap_or(0.0)
    }
}

/// Response of `/trending`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingPayload {
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub trending: Vec<TrendRecord>,
}
