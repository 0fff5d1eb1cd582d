//! Inventory history lookup by SKU and/or store.
//!
//! Unlike the other views nothing is queried when a filter changes; the user
//! submits with [`InventoryView::search`]. The store picker is fed from
//! `/stores`, fetched once on mount.

use std::sync::Arc;

use crate::binding::{FetchState, QueryBinding};
use crate::client::Gateway;
use crate::error::{DabsError, Result};
use crate::models::{InventorySample, StoreRecord};
use crate::queries::{InventoryParams, InventoryQuery, ItemQuery, StoreQuery};

pub const FAILURE: &str = "Failed to load inventory data";
pub const STORES_FAILURE: &str = "Failed to load stores";
pub const VALIDATION: &str = "Please enter a SKU or select a store";
pub const LOADING: &str = "Loading...";

/// Result of one submitted search, together with the filters it was run with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryLookup {
    pub sku: Option<String>,
    pub store_id: Option<String>,
    pub samples: Vec<InventorySample>,
    /// Display name resolved for `sku`, when one was searched and found.
    pub item_name: Option<String>,
}

impl InventoryLookup {
    pub fn title(&self) -> String {
        match (&self.item_name, &self.store_id) {
            (Some(name), _) => format!("Inventory for {}", name),
            (None, Some(store)) => format!("Inventory for Store #{}", store),
            (None, None) => "Inventory Results".to_string(),
        }
    }
}

/// One point of the quantity-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: String,
    pub quantity: i64,
    pub store_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub date: String,
    pub store_id: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryModel {
    pub title: String,
    pub chart: Vec<ChartPoint>,
    pub rows: Vec<InventoryRow>,
}

impl InventoryModel {
    pub fn derive(lookup: &InventoryLookup) -> Self {
        Self {
            title: lookup.title(),
            chart: chart_series(&lookup.samples),
            rows: lookup
                .samples
                .iter()
                .map(|s| InventoryRow {
                    date: s.record_date.clone(),
                    store_id: s.store_id.clone(),
                    quantity: s.quantity_text(),
                })
                .collect(),
        }
    }

    /// Nothing is rendered for an empty result.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Chart points in date order. Quantities that do not parse chart as 0.
pub fn chart_series(samples: &[InventorySample]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = samples
        .iter()
        .map(|s| ChartPoint {
            date: s.record_date.clone(),
            quantity: s.quantity(),
            store_id: s.store_id.clone(),
        })
        .collect();
    // ISO dates order lexically; the sort is stable for same-day samples.
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

async fn run_lookup(gateway: Arc<dyn Gateway>, params: InventoryParams) -> Result<InventoryLookup> {
    let samples = InventoryQuery::new(gateway.as_ref())
        .history(&params)
        .await?;

    let item_name = match &params.sku {
        Some(sku) if !samples.is_empty() => {
            ItemQuery::new(gateway.as_ref()).name_for_sku(sku).await?
        }
        _ => None,
    };

    Ok(InventoryLookup {
        sku: params.sku,
        store_id: params.store_id,
        samples,
        item_name,
    })
}

pub struct InventoryView {
    gateway: Arc<dyn Gateway>,
    sku: String,
    store_id: String,
    stores: QueryBinding<Vec<StoreRecord>>,
    lookup: QueryBinding<InventoryLookup>,
}

impl InventoryView {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let mut stores = QueryBinding::new();
        let gw = Arc::clone(&gateway);
        stores.run(STORES_FAILURE, async move {
            StoreQuery::new(gw.as_ref()).list().await
        });

        Self {
            gateway,
            sku: String::new(),
            store_id: String::new(),
            stores,
            lookup: QueryBinding::new(),
        }
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn set_sku(&mut self, sku: impl Into<String>) {
        self.sku = sku.into();
    }

    /// Select a store (`""` for none).
    pub fn set_store_id(&mut self, store_id: impl Into<String>) {
        self.store_id = store_id.into();
    }

    /// Submit the current filters.
    ///
    /// With neither a SKU nor a store the search is rejected locally: no
    /// request is sent and the view shows the validation message.
    pub fn search(&mut self) -> Result<()> {
        if self.sku.is_empty() && self.store_id.is_empty() {
            self.lookup.reject(VALIDATION);
            return Err(DabsError::Validation(VALIDATION.to_string()));
        }

        let params = InventoryParams {
            sku: Some(self.sku.clone()).filter(|s| !s.is_empty()),
            store_id: Some(self.store_id.clone()).filter(|s| !s.is_empty()),
        };
        tracing::debug!(?params, "searching inventory");
        let gateway = Arc::clone(&self.gateway);
        self.lookup.run(FAILURE, run_lookup(gateway, params));
        Ok(())
    }

    /// Store picker options; empty until `/stores` has loaded.
    pub fn store_options(&self) -> Vec<StoreRecord> {
        self.stores
            .with_state(|s| s.data().cloned())
            .unwrap_or_default()
    }

    pub fn state(&self) -> FetchState<InventoryLookup> {
        self.lookup.state()
    }

    pub fn model(&self) -> FetchState<InventoryModel> {
        self.lookup.with_state(|s| s.map(InventoryModel::derive))
    }

    pub fn is_loading(&self) -> bool {
        self.lookup.with_state(FetchState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.lookup.with_state(|s| s.error().map(str::to_string))
    }

    pub async fn settle(&mut self) {
        self.stores.settle().await;
        self.lookup.settle().await;
    }
}
