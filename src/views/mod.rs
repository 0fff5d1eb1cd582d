//! Per-screen controllers.
//!
//! Every view pairs one or more [`QueryBinding`](crate::binding::QueryBinding)s
//! with the filters that drive them, plus a pure `derive` step that turns a
//! fetched payload into the values actually rendered. Views are mounted with
//! a shared [`Gateway`](crate::client::Gateway) and fetch what they need on
//! mount; dropping a view cancels its requests.

pub mod dashboard;
pub mod inventory;
pub mod products;
pub mod stores;
pub mod trending;

pub use dashboard::{CategoryBar, DashboardModel, DashboardView};
pub use inventory::{ChartPoint, InventoryLookup, InventoryModel, InventoryRow, InventoryView};
pub use products::{Pagination, ProductCard, ProductFilters, ProductsModel, ProductsView};
pub use stores::{filter_stores, StoresView};
pub use trending::{partition_trends, TrendCard, TrendReport, TrendingModel, TrendingView};
