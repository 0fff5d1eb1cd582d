//! Overview statistics: stat cards plus a products-by-category chart.

use std::sync::Arc;

use crate::binding::{FetchState, QueryBinding};
use crate::client::Gateway;
use crate::config::CATEGORY_CHART_LIMIT;
use crate::format;
use crate::models::StatsPayload;
use crate::queries::StatsQuery;

pub const FAILURE: &str = "Failed to load dashboard data";
pub const LOADING: &str = "Loading dashboard...";

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub name: String,
    pub count: u64,
    pub avg_price: String,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub date: String,
    pub total_items: String,
    pub store_count: String,
    pub avg_price: String,
    pub min_price: String,
    pub max_price: String,
    pub categories: Vec<CategoryBar>,
}

impl DashboardModel {
    pub fn derive(stats: &StatsPayload) -> Self {
        let prices = stats.price_stats.clone().unwrap_or_default();
        Self {
            date: stats.date.clone().unwrap_or_default(),
            total_items: format::count(stats.total_items),
            store_count: format::count(stats.store_count),
            avg_price: format::price(prices.avg_price),
            min_price: format::price(prices.min_price),
            max_price: format::price(prices.max_price),
            categories: stats
                .categories
                .iter()
                .map(|c| CategoryBar {
                    name: c.label().to_string(),
                    count: c.count,
                    avg_price: format::price(c.avg_price),
                })
                .collect(),
        }
    }

    /// Bars shown in the chart: the first ten categories.
    pub fn chart(&self) -> &[CategoryBar] {
        let n = self.categories.len().min(CATEGORY_CHART_LIMIT);
        &self.categories[..n]
    }
}

/// Dashboard controller. Fetches `/stats` once, on mount.
pub struct DashboardView {
    stats: QueryBinding<StatsPayload>,
}

impl DashboardView {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let mut stats = QueryBinding::new();
        stats.run(FAILURE, async move { StatsQuery::new(gateway.as_ref()).get().await });
        Self { stats }
    }

    pub fn state(&self) -> FetchState<StatsPayload> {
        self.stats.state()
    }

    pub fn model(&self) -> FetchState<DashboardModel> {
        self.stats.with_state(|s| s.map(DashboardModel::derive))
    }

    pub fn is_loading(&self) -> bool {
        self.stats.with_state(FetchState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.stats.with_state(|s| s.error().map(str::to_string))
    }

    pub async fn settle(&mut self) {
        self.stats.settle().await;
    }
}
