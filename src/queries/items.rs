//! Product catalog queries against `/items`.

use crate::client::Gateway;
use crate::config;
use crate::error::Result;
use crate::models::ItemsPage;
use crate::query_params::QueryParams;

use super::decode;

// ---------------------------------------------------------------------------
// SearchItemsParams
// ---------------------------------------------------------------------------

/// Parameters for the catalog search.
///
/// All fields are optional. When `None`, the parameter is not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchItemsParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl SearchItemsParams {
    /// One catalog page: empty filters are dropped, `skip`/`limit` derive from
    /// the page index and page size.
    pub fn page(search: &str, category: &str, page: u64, page_size: u64) -> Self {
        Self {
            search: non_empty(search),
            category: non_empty(category),
            skip: Some(page * page_size),
            limit: Some(page_size),
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .set_opt("search", self.search.as_ref())
            .set_opt("category", self.category.as_ref())
            .set_opt("skip", self.skip)
            .set_opt("limit", self.limit);
        params
    }
}

fn non_empty(s: &str) -> Option<String> {
    Some(s.to_string()).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// ItemQuery
// ---------------------------------------------------------------------------

/// Query interface for the `/items` resource.
pub struct ItemQuery<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> ItemQuery<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> Self {
        Self { gateway }
    }

    /// Search the catalog.
    pub async fn search(&self, params: &SearchItemsParams) -> Result<ItemsPage> {
        let body = self
            .gateway
            .call(config::ITEMS_PATH, &params.to_params())
            .await?;
        decode(config::ITEMS_PATH, body)
    }

    /// Display name of the first item matching `sku`, if any.
    pub async fn name_for_sku(&self, sku: &str) -> Result<Option<String>> {
        let page = self
            .search(&SearchItemsParams {
                search: Some(sku.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(page.items.into_iter().next().map(|item| item.name))
    }
}
