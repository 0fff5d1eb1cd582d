//! Typed queries, one per API resource.
//!
//! Each query struct borrows a [`Gateway`](crate::client::Gateway) and exposes
//! async methods returning `Result<T>` with decoded model types.

pub mod inventory;
pub mod items;
pub mod stats;
pub mod stores;
pub mod trending;

pub use inventory::{InventoryParams, InventoryQuery};
pub use items::{ItemQuery, SearchItemsParams};
pub use stats::StatsQuery;
pub use stores::StoreQuery;
pub use trending::TrendingQuery;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DabsError, Result};

/// Decode a response body. A body of the wrong shape is reported as an API
/// failure on `path`, like any other bad response.
fn decode<T: DeserializeOwned>(path: &str, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| DabsError::Api {
        path: path.to_string(),
        status: None,
        reason: format!("unexpected response shape: {}", e),
    })
}
