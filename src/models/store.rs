use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(default, deserialize_with = "de::text")]
    pub store_id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub store_name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub address: String,
    #[serde(default, deserialize_with = "de::text")]
    pub city: String,
    #[serde(default, deserialize_with = "de::text")]
    pub phone: String,
}

/// Response of `/stores`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoresPayload {
    #[serde(default, deserialize_with = "de::vec_or_empty")]
    pub stores: Vec<StoreRecord>,
}
