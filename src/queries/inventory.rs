//! Inventory history from `/inventory`.

use crate::client::Gateway;
use crate::config;
use crate::error::Result;
use crate::models::{InventoryPayload, InventorySample};
use crate::query_params::QueryParams;

use super::decode;

/// Parameters for an inventory lookup. At least one should be set; the
/// view layer enforces that before calling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryParams {
    pub sku: Option<String>,
    pub store_id: Option<String>,
}

impl InventoryParams {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .set_opt("sku", self.sku.as_ref())
            .set_opt("store_id", self.store_id.as_ref());
        params
    }
}

/// Query interface for the `/inventory` resource.
pub struct InventoryQuery<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> InventoryQuery<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    pub async fn history(&self, params: &InventoryParams) -> Result<Vec<InventorySample>> {
        let body = self
            .gateway
            .call(config::INVENTORY_PATH, &params.to_params())
            .await?;
        let payload: InventoryPayload = decode(config::INVENTORY_PATH, body)?;
        Ok(payload.inventory)
    }
}
