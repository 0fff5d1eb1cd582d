//! DABS Explorer: client and dashboard for the DABS statistics API.
//!
//! Queries a remote read-only API for catalog statistics, products,
//! inventory history, stores and trending items, and turns the responses into
//! ready-to-render view models. Every view keeps its own fetch state; a new
//! filter value supersedes any request still in flight.
//!
//! # Quick start
//!
//! ```no_run
//! use dabs_explorer::DabsExplorer;
//!
//! # async fn example() -> dabs_explorer::Result<()> {
//! let explorer = DabsExplorer::builder()
//!     .base_url("https://api.example.com/prod")
//!     .build()?;
//!
//! // Product catalog, filtered by search text
//! let mut products = explorer.products();
//! products.set_search("merlot");
//! products.settle().await;
//! println!("{:?}", products.model());
//! # Ok(())
//! # }
//! ```

pub mod binding;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;
pub mod query_params;
pub mod render;
pub mod shell;
pub mod views;

pub use binding::{FetchState, QueryBinding};
pub use client::{ApiClient, Gateway};
pub use config::Settings;
pub use error::{DabsError, Result};
pub use query_params::{ParamValue, QueryParams};
pub use shell::{Screen, Shell, View};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use views::{DashboardView, InventoryView, ProductsView, StoresView, TrendingView};

// ---------------------------------------------------------------------------
// DabsExplorerBuilder
// ---------------------------------------------------------------------------

/// Connection settings for a [`DabsExplorer`].
///
/// Starts from the built-in defaults. [`build()`](DabsExplorerBuilder::build)
/// rejects a base URL that is not `http(s)://` and a zero timeout.
#[derive(Default)]
pub struct DabsExplorerBuilder {
    settings: Settings,
    timeout: Option<Duration>,
}

impl DabsExplorerBuilder {
    /// Start from already-resolved settings (see [`Settings::load`]).
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the API base URL, e.g. `https://host/prod`. Paths such as
    /// `/stats` are appended to it.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.settings.api_url = url.into();
        self
    }

    /// Send `key` in the `x-api-key` header of every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.settings.api_key = Some(key.into());
        self
    }

    /// Set the per-request timeout, overriding `timeout_secs` from the settings.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the settings and build the HTTP client.
    ///
    /// No request is made until a view is mounted.
    pub fn build(self) -> Result<DabsExplorer> {
        let client = match self.timeout {
            Some(timeout) => {
                self.settings.validate_url()?;
                ApiClient::new(&self.settings.api_url, self.settings.api_key.clone(), timeout)?
            }
            None => ApiClient::from_settings(&self.settings)?,
        };
        Ok(DabsExplorer {
            gateway: Arc::new(client),
            description: self.settings.api_url.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// DabsExplorer
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Holds a shared [`Gateway`] and mounts views on it. Each accessor mounts a
/// fresh view, which immediately issues its on-mount requests, so accessors
/// must be called from within a tokio runtime.
#[derive(Clone)]
pub struct DabsExplorer {
    gateway: Arc<dyn Gateway>,
    description: String,
}

impl DabsExplorer {
    /// Create a new builder for configuring the explorer.
    pub fn builder() -> DabsExplorerBuilder {
        DabsExplorerBuilder::default()
    }

    /// Use any [`Gateway`] implementation instead of the HTTP client.
    pub fn with_gateway(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            description: "custom gateway".to_string(),
        }
    }

    pub fn gateway(&self) -> Arc<dyn Gateway> {
        Arc::clone(&self.gateway)
    }

    // -- View accessors ------------------------------------------------------

    /// Mount the dashboard (fetches `/stats`).
    pub fn dashboard(&self) -> DashboardView {
        DashboardView::mount(self.gateway())
    }

    /// Mount the product catalog (fetches `/stats` and the first `/items` page).
    pub fn products(&self) -> ProductsView {
        ProductsView::mount(self.gateway())
    }

    /// Mount the inventory tracker (fetches `/stores` for the store picker).
    pub fn inventory(&self) -> InventoryView {
        InventoryView::mount(self.gateway())
    }

    /// Mount the store locator (fetches `/stores`).
    pub fn stores(&self) -> StoresView {
        StoresView::mount(self.gateway())
    }

    /// Mount the trending report (fetches `/trending`).
    pub fn trending(&self) -> TrendingView {
        TrendingView::mount(self.gateway())
    }

    /// Create a shell starting on `view`.
    pub fn shell(&self, view: View) -> Shell {
        Shell::starting_at(view, self.gateway())
    }
}

impl fmt::Display for DabsExplorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DabsExplorer({})", self.description)
    }
}
