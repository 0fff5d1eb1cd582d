//! Product catalog with search, category filter and pagination.
//!
//! Every filter change re-queries `/items`. The category dropdown is fed from
//! `/stats`, fetched once on mount; a failure there only costs the dropdown
//! its options.

use std::sync::Arc;

use crate::binding::{FetchState, QueryBinding};
use crate::client::Gateway;
use crate::config::PAGE_SIZE;
use crate::format;
use crate::models::{ItemsPage, ProductRecord};
use crate::queries::{ItemQuery, SearchItemsParams, StatsQuery};

pub const FAILURE: &str = "Failed to load products";
pub const CATEGORIES_FAILURE: &str = "Failed to load categories";
pub const LOADING: &str = "Loading products...";

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page bounds derived from the server's item total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    pub fn new(page: u64, total_items: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_previous: page > 0,
            has_next: page + 1 < total_pages,
        }
    }

    /// `Page 1 of 3` (one-based for display).
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl From<&ProductRecord> for ProductCard {
    fn from(p: &ProductRecord) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            category: p.display_group.clone().unwrap_or_default(),
            price: format::price(p.current_price),
            stock: format!(
                "In Stock: {} (Warehouse: {})",
                format::count(p.store_qty),
                format::count(p.warehouse_qty)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductsModel {
    /// Number of products on this page.
    pub showing: usize,
    pub total: u64,
    pub cards: Vec<ProductCard>,
    pub pagination: Pagination,
}

impl ProductsModel {
    pub fn derive(page: &ItemsPage, page_index: u64) -> Self {
        Self {
            showing: page.items.len(),
            total: page.total,
            cards: page.items.iter().map(ProductCard::from).collect(),
            pagination: Pagination::new(page_index, page.total, PAGE_SIZE),
        }
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.showing, self.total)
    }
}

// ---------------------------------------------------------------------------
// ProductsView
// ---------------------------------------------------------------------------

/// User-editable catalog filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub search: String,
    pub category: String,
    pub page: u64,
}

impl ProductFilters {
    pub fn to_params(&self) -> SearchItemsParams {
        SearchItemsParams::page(&self.search, &self.category, self.page, PAGE_SIZE)
    }
}

pub struct ProductsView {
    gateway: Arc<dyn Gateway>,
    filters: ProductFilters,
    products: QueryBinding<ItemsPage>,
    categories: QueryBinding<Vec<String>>,
}

impl ProductsView {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let mut categories = QueryBinding::new();
        let gw = Arc::clone(&gateway);
        categories.run(CATEGORIES_FAILURE, async move {
            StatsQuery::new(gw.as_ref()).category_names().await
        });

        let mut view = Self {
            gateway,
            filters: ProductFilters::default(),
            products: QueryBinding::new(),
            categories,
        };
        view.refetch();
        view
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    /// Change the search text. Returns `true` if a new query was issued.
    ///
    /// A new search starts again from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.filters.search {
            return false;
        }
        self.filters.search = search;
        self.filters.page = 0;
        self.refetch();
        true
    }

    /// Change the category (`""` for all). Returns `true` if a new query was issued.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if category == self.filters.category {
            return false;
        }
        self.filters.category = category;
        self.filters.page = 0;
        self.refetch();
        true
    }

    /// Advance one page. A no-op unless a loaded page says a next one exists.
    pub fn next_page(&mut self) -> bool {
        match self.pagination() {
            Some(p) if p.has_next => {
                self.filters.page += 1;
                self.refetch();
                true
            }
            _ => false,
        }
    }

    /// Go back one page. A no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.filters.page == 0 {
            return false;
        }
        self.filters.page -= 1;
        self.refetch();
        true
    }

    /// Jump to a zero-based page, if the loaded total says it exists.
    pub fn go_to_page(&mut self, page: u64) -> bool {
        match self.pagination() {
            Some(p) if page < p.total_pages && page != self.filters.page => {
                self.filters.page = page;
                self.refetch();
                true
            }
            _ => false,
        }
    }

    /// Bounds of the loaded page; `None` until a page has loaded.
    pub fn pagination(&self) -> Option<Pagination> {
        let page = self.filters.page;
        self.products.with_state(|s| {
            s.data()
                .map(|data| Pagination::new(page, data.total, PAGE_SIZE))
        })
    }

    /// Dropdown options; empty until `/stats` has loaded.
    pub fn category_options(&self) -> Vec<String> {
        self.categories
            .with_state(|s| s.data().cloned())
            .unwrap_or_default()
    }

    pub fn state(&self) -> FetchState<ItemsPage> {
        self.products.state()
    }

    pub fn model(&self) -> FetchState<ProductsModel> {
        let page = self.filters.page;
        self.products
            .with_state(|s| s.map(|data| ProductsModel::derive(data, page)))
    }

    pub fn is_loading(&self) -> bool {
        self.products.with_state(FetchState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.products.with_state(|s| s.error().map(str::to_string))
    }

    pub async fn settle(&mut self) {
        self.categories.settle().await;
        self.products.settle().await;
    }

    fn refetch(&mut self) {
        let params = self.filters.to_params();
        let gateway = Arc::clone(&self.gateway);
        tracing::debug!(?params, "querying products");
        self.products.run(FAILURE, async move {
            ItemQuery::new(gateway.as_ref()).search(&params).await
        });
    }
}
