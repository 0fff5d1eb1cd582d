//! Trending items from `/trending`.

use crate::client::Gateway;
use crate::config;
use crate::error::Result;
use crate::models::{TrendRecord, TrendingPayload};
use crate::query_params::QueryParams;

use super::decode;

/// Query interface for the `/trending` resource.
pub struct TrendingQuery<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> TrendingQuery<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<TrendRecord>> {
        let body = self
            .gateway
            .call(config::TRENDING_PATH, &QueryParams::new())
            .await?;
        let payload: TrendingPayload = decode(config::TRENDING_PATH, body)?;
        Ok(payload.trending)
    }
}
