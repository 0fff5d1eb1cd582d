//! Trending items split into rising and falling inventory.

use std::sync::Arc;

use crate::binding::{FetchState, QueryBinding};
use crate::client::Gateway;
use crate::format;
use crate::models::TrendRecord;
use crate::queries::TrendingQuery;

pub const FAILURE: &str = "Failed to load trending data";
pub const LOADING: &str = "Loading trending items...";
pub const NO_INCREASING: &str = "No increasing trends found";
pub const NO_DECREASING: &str = "No decreasing trends found";

/// Trend records partitioned by the sign of `change`.
///
/// Records with no change belong to neither side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendReport {
    pub increasing: Vec<TrendRecord>,
    pub decreasing: Vec<TrendRecord>,
}

pub fn partition_trends(records: &[TrendRecord]) -> TrendReport {
    TrendReport {
        increasing: records.iter().filter(|r| r.delta() > 0.0).cloned().collect(),
        decreasing: records.iter().filter(|r| r.delta() < 0.0).cloned().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendCard {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: String,
    /// `+5 (+12.50%)` when rising, `-3 (-4.00%)` when falling.
    pub change: String,
    /// `10 → 15`
    pub quantities: String,
}

impl TrendCard {
    pub fn from_record(record: &TrendRecord) -> Self {
        let delta = record.delta();
        let sign = if delta > 0.0 { "+" } else { "" };
        let pct = format::percent(record.change_percent);
        let pct = if pct == format::NOT_AVAILABLE {
            pct
        } else {
            format!("{}{}%", sign, pct)
        };
        Self {
            sku: record.sku.clone(),
            name: record.name.clone(),
            category: record.display_group.clone().unwrap_or_default(),
            price: format::price(record.price),
            change: format!("{}{} ({})", sign, format::number(delta), pct),
            quantities: format!(
                "{} \u{2192} {}",
                format::count(record.previous_qty),
                format::count(record.current_qty)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingModel {
    pub increasing: Vec<TrendCard>,
    pub decreasing: Vec<TrendCard>,
}

impl TrendingModel {
    pub fn derive(records: &[TrendRecord]) -> Self {
        let report = partition_trends(records);
        Self {
            increasing: report.increasing.iter().map(TrendCard::from_record).collect(),
            decreasing: report.decreasing.iter().map(TrendCard::from_record).collect(),
        }
    }
}

/// Trending controller. Fetches `/trending` once, on mount.
pub struct TrendingView {
    trending: QueryBinding<Vec<TrendRecord>>,
}

impl TrendingView {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let mut trending = QueryBinding::new();
        trending.run(FAILURE, async move { TrendingQuery::new(gateway.as_ref()).list().await });
        Self { trending }
    }

    pub fn state(&self) -> FetchState<Vec<TrendRecord>> {
        self.trending.state()
    }

    pub fn report(&self) -> FetchState<TrendReport> {
        self.trending.with_state(|s| s.map(|r| partition_trends(r)))
    }

    pub fn model(&self) -> FetchState<TrendingModel> {
        self.trending.with_state(|s| s.map(|r| TrendingModel::derive(r)))
    }

    pub fn is_loading(&self) -> bool {
        self.trending.with_state(FetchState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.trending.with_state(|s| s.error().map(str::to_string))
    }

    pub async fn settle(&mut self) {
        self.trending.settle().await;
    }
}
