//! Store directory from `/stores`.

use crate::client::Gateway;
use crate::config;
use crate::error::Result;
use crate::models::{StoreRecord, StoresPayload};
use crate::query_params::QueryParams;

use super::decode;

/// Query interface for the `/stores` resource.
pub struct StoreQuery<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> StoreQuery<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    /// The full store list. The server does not paginate it.
    pub async fn list(&self) -> Result<Vec<StoreRecord>> {
        let body = self
            .gateway
            .call(config::STORES_PATH, &QueryParams::new())
            .await?;
        let payload: StoresPayload = decode(config::STORES_PATH, body)?;
        Ok(payload.stores)
    }
}
