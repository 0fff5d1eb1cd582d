use serde::{Deserialize, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// StatsPayload: response of `/stats`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub total_items: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_i64")]
    pub store_count: Option<i64>,
    #[serde(default)]
    pub price_stats: Option<PriceStats>,
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub categories: Vec<CategoryStat>,
}

// ---------------------------------------------------------------------------
// PriceStats: catalog-wide price summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub avg_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub max_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// CategoryStat: per display-group aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    /// Category label. Missing, `null`, `""`, `0` and `false` decode as `None`.
    #[serde(rename = "_id", default, deserialize_with = "de::opt_label")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub count: u64,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub avg_price: Option<f64>,
}

impl CategoryStat {
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("Unknown")
    }
}
