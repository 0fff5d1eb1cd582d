//! Store directory with local text filtering.
//!
//! The full list is fetched once on mount; typing in the search box filters
//! it in memory and never re-queries the API.

use std::sync::Arc;

use crate::binding::{FetchState, QueryBinding};
use crate::client::Gateway;
use crate::models::StoreRecord;
use crate::queries::StoreQuery;

pub const FAILURE: &str = "Failed to load stores";
pub const LOADING: &str = "Loading stores...";

/// Stores whose name or city contains `term`, ignoring case.
///
/// An empty term matches every store.
pub fn filter_stores<'a>(stores: &'a [StoreRecord], term: &str) -> Vec<&'a StoreRecord> {
    let needle = term.to_lowercase();
    stores
        .iter()
        .filter(|s| {
            s.store_name.to_lowercase().contains(&needle) || s.city.to_lowercase().contains(&needle)
        })
        .collect()
}

pub struct StoresView {
    stores: QueryBinding<Vec<StoreRecord>>,
    search: String,
    selected: Option<String>,
}

impl StoresView {
    pub fn mount(gateway: Arc<dyn Gateway>) -> Self {
        let mut stores = QueryBinding::new();
        stores.run(FAILURE, async move { StoreQuery::new(gateway.as_ref()).list().await });
        Self {
            stores,
            search: String::new(),
            selected: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// The fetched list narrowed by the current search text.
    pub fn visible(&self) -> FetchState<Vec<StoreRecord>> {
        let term = &self.search;
        self.stores.with_state(|s| {
            s.map(|stores| filter_stores(stores, term).into_iter().cloned().collect())
        })
    }

    /// Highlight a store card. Returns `false` for an id not in the loaded list.
    pub fn select(&mut self, store_id: &str) -> bool {
        let known = self
            .stores
            .with_state(|s| s.data().is_some_and(|list| list.iter().any(|st| st.store_id == store_id)));
        if known {
            self.selected = Some(store_id.to_string());
        }
        known
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn state(&self) -> FetchState<Vec<StoreRecord>> {
        self.stores.state()
    }

    pub fn is_loading(&self) -> bool {
        self.stores.with_state(FetchState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.stores.with_state(|s| s.error().map(str::to_string))
    }

    pub async fn settle(&mut self) {
        self.stores.settle().await;
    }
}
