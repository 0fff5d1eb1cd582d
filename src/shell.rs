//! Top-level view selector.
//!
//! The [`Shell`] mounts exactly one view at a time. Switching views drops the
//! previous one, which cancels its requests; re-entering a view mounts it
//! afresh and fetches again, so nothing is cached across switches.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::client::Gateway;
use crate::error::{DabsError, Result};
use crate::views::{DashboardView, InventoryView, ProductsView, StoresView, TrendingView};

/// The five screens of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Products,
    Inventory,
    Stores,
    Trending,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Products,
        View::Inventory,
        View::Stores,
        View::Trending,
    ];

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Products => "Products",
            View::Inventory => "Inventory",
            View::Stores => "Stores",
            View::Trending => "Trending",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Products => "products",
            View::Inventory => "inventory",
            View::Stores => "stores",
            View::Trending => "trending",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for View {
    type Err = DabsError;

    fn from_str(s: &str) -> Result<Self> {
        View::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DabsError::InvalidArgument(format!("Unknown view: {}", s)))
    }
}

/// The mounted view and its controller.
pub enum Screen {
    Dashboard(DashboardView),
    Products(ProductsView),
    Inventory(InventoryView),
    Stores(StoresView),
    Trending(TrendingView),
}

impl Screen {
    pub fn mount(view: View, gateway: Arc<dyn Gateway>) -> Self {
        tracing::info!(view = %view, "mounting view");
        match view {
            View::Dashboard => Screen::Dashboard(DashboardView::mount(gateway)),
            View::Products => Screen::Products(ProductsView::mount(gateway)),
            View::Inventory => Screen::Inventory(InventoryView::mount(gateway)),
            View::Stores => Screen::Stores(StoresView::mount(gateway)),
            View::Trending => Screen::Trending(TrendingView::mount(gateway)),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Screen::Dashboard(_) => View::Dashboard,
            Screen::Products(_) => View::Products,
            Screen::Inventory(_) => View::Inventory,
            Screen::Stores(_) => View::Stores,
            Screen::Trending(_) => View::Trending,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Screen::Dashboard(v) => v.is_loading(),
            Screen::Products(v) => v.is_loading(),
            Screen::Inventory(v) => v.is_loading(),
            Screen::Stores(v) => v.is_loading(),
            Screen::Trending(v) => v.is_loading(),
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            Screen::Dashboard(v) => v.error(),
            Screen::Products(v) => v.error(),
            Screen::Inventory(v) => v.error(),
            Screen::Stores(v) => v.error(),
            Screen::Trending(v) => v.error(),
        }
    }

    pub async fn settle(&mut self) {
        match self {
            Screen::Dashboard(v) => v.settle().await,
            Screen::Products(v) => v.settle().await,
            Screen::Inventory(v) => v.settle().await,
            Screen::Stores(v) => v.settle().await,
            Screen::Trending(v) => v.settle().await,
        }
    }
}

/// Application shell: one active view at a time.
pub struct Shell {
    gateway: Arc<dyn Gateway>,
    screen: Screen,
}

impl Shell {
    /// Start on the dashboard.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self::starting_at(View::default(), gateway)
    }

    pub fn starting_at(view: View, gateway: Arc<dyn Gateway>) -> Self {
        let screen = Screen::mount(view, Arc::clone(&gateway));
        Self { gateway, screen }
    }

    pub fn active(&self) -> View {
        self.screen.view()
    }

    /// Switch to `view`. Re-selecting the active view keeps it as it is.
    pub fn select(&mut self, view: View) -> &mut Screen {
        if self.active() != view {
            self.screen = Screen::mount(view, Arc::clone(&self.gateway));
        }
        &mut self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// True while the active view is waiting on its main request.
    pub fn is_loading(&self) -> bool {
        self.screen.is_loading()
    }

    /// Failure message of the active view, if it failed.
    pub fn error(&self) -> Option<String> {
        self.screen.error()
    }

    /// Jump from the store directory to that store's inventory history.
    pub fn open_store_inventory(&mut self, store_id: &str) -> Result<()> {
        let mut inventory = InventoryView::mount(Arc::clone(&self.gateway));
        inventory.set_store_id(store_id);
        let submitted = inventory.search();
        self.screen = Screen::Inventory(inventory);
        submitted
    }

    pub async fn settle(&mut self) {
        self.screen.settle().await;
    }
}
