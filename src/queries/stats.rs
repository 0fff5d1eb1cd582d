//! Dashboard statistics from `/stats`.

use crate::client::Gateway;
use crate::config;
use crate::error::Result;
use crate::models::StatsPayload;
use crate::query_params::QueryParams;

use super::decode;

/// Query interface for the `/stats` resource.
pub struct StatsQuery<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> StatsQuery<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    /// Fetch the full statistics payload.
    pub async fn get(&self) -> Result<StatsPayload> {
        let body = self
            .gateway
            .call(config::STATS_PATH, &QueryParams::new())
            .await?;
        decode(config::STATS_PATH, body)
    }

    /// Category labels for filter dropdowns: unique, in order of first
    /// appearance, with missing labels dropped.
    pub async fn category_names(&self) -> Result<Vec<String>> {
        Ok(category_names(&self.get().await?))
    }
}

pub fn category_names(stats: &StatsPayload) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for id in stats.categories.iter().filter_map(|c| c.id.as_deref()) {
        if !names.iter().any(|n| n == id) {
            names.push(id.to_string());
        }
    }
    names
}
