//! Plain-text rendering of each view for the terminal.
//!
//! Cards become indented blocks, tables become aligned columns and charts
//! become horizontal bars scaled to [`BAR_WIDTH`].

use std::fmt::Write;

use crate::binding::FetchState;
use crate::shell::{Screen, View};
use crate::views::{
    dashboard, inventory, products, stores, trending, CategoryBar, ChartPoint, DashboardModel,
    InventoryModel, ProductsModel, TrendCard, TrendingModel,
};
use crate::views::{DashboardView, InventoryView, ProductsView, StoresView, TrendingView};

pub const BAR_WIDTH: usize = 40;

pub const TITLE: &str = "DABS Data Explorer";
pub const FOOTER: &str = "DABS Data Explorer - Data updated daily";

/// Navigation header, footer and the active screen.
pub fn page(screen: &Screen) -> String {
    let nav: Vec<String> = View::ALL
        .iter()
        .map(|v| {
            if *v == screen.view() {
                format!("[{}]", v.label())
            } else {
                v.label().to_string()
            }
        })
        .collect();
    format!(
        "{}\n{}\n\n{}\n{}\n",
        TITLE,
        nav.join("  "),
        render_screen(screen).trim_end(),
        FOOTER
    )
}

pub fn render_screen(screen: &Screen) -> String {
    match screen {
        Screen::Dashboard(v) => render_dashboard(v),
        Screen::Products(v) => render_products(v),
        Screen::Inventory(v) => render_inventory(v),
        Screen::Stores(v) => render_stores(v),
        Screen::Trending(v) => render_trending(v),
    }
}

/// Shared Idle/Loading/Failed handling; `loaded` renders the data.
fn state_or<T>(state: &FetchState<T>, loading: &str, loaded: impl FnOnce(&T) -> String) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => format!("{}\n", loading),
        FetchState::Failed(message) => format!("Error: {}\n", message),
        FetchState::Loaded(data) => loaded(data),
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub fn render_dashboard(view: &DashboardView) -> String {
    state_or(&view.model(), dashboard::LOADING, dashboard_body)
}

pub fn dashboard_body(model: &DashboardModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dashboard");
    let _ = writeln!(out, "Data as of: {}\n", model.date);
    let _ = writeln!(out, "  Total Products: {}", model.total_items);
    let _ = writeln!(out, "  Total Stores:   {}", model.store_count);
    let _ = writeln!(out, "  Avg Price:      {}", dollars(&model.avg_price));
    let _ = writeln!(
        out,
        "  Price Range:    {} - {}",
        dollars(&model.min_price),
        dollars(&model.max_price)
    );
    let _ = writeln!(out, "\nProducts by Category");
    out.push_str(&category_chart(model.chart()));
    out
}

fn dollars(amount: &str) -> String {
    if amount == crate::format::NOT_AVAILABLE {
        amount.to_string()
    } else {
        format!("${}", amount)
    }
}

fn category_chart(bars: &[CategoryBar]) -> String {
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
    let width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for bar in bars {
        let _ = writeln!(
            out,
            "  {:<width$} {} {}",
            bar.name,
            scaled_bar(bar.count as f64, max as f64),
            bar.count,
            width = width
        );
    }
    out
}

fn scaled_bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "#".repeat(len)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

pub fn render_products(view: &ProductsView) -> String {
    let filters = view.filters();
    let category = if filters.category.is_empty() {
        "All Categories"
    } else {
        filters.category.as_str()
    };
    let mut out = String::new();
    let _ = writeln!(out, "Products");
    let _ = writeln!(out, "Search: {:?}  Category: {}", filters.search, category);
    let options = view.category_options();
    if !options.is_empty() {
        let _ = writeln!(out, "Categories: All Categories, {}", options.join(", "));
    }
    let _ = writeln!(out);
    out.push_str(&state_or(&view.model(), products::LOADING, products_body));
    out
}

pub fn products_body(model: &ProductsModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", model.summary());
    for card in &model.cards {
        let _ = writeln!(out, "  {}", card.name);
        let _ = writeln!(out, "    SKU: {}", card.sku);
        let _ = writeln!(out, "    {}", card.category);
        let _ = writeln!(out, "    {}", dollars(&card.price));
        let _ = writeln!(out, "    {}", card.stock);
    }
    let p = &model.pagination;
    let _ = writeln!(
        out,
        "\n{} {} {}",
        if p.has_previous { "< Previous" } else { "  --------" },
        p.label(),
        if p.has_next { "Next >" } else { "----  " }
    );
    out
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

pub fn render_inventory(view: &InventoryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Inventory Tracker");
    let _ = writeln!(out, "SKU: {:?}  Store: {:?}\n", view.sku(), view.store_id());
    out.push_str(&state_or(&view.model(), inventory::LOADING, inventory_body));
    out
}

pub fn inventory_body(model: &InventoryModel) -> String {
    if model.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", model.title);
    out.push_str(&quantity_chart(&model.chart));
    let _ = writeln!(out);
    out.push_str(&table(
        &["Date", "Store", "Quantity"],
        model
            .rows
            .iter()
            .map(|r| vec![r.date.clone(), r.store_id.clone(), r.quantity.clone()])
            .collect(),
    ));
    out
}

fn quantity_chart(points: &[ChartPoint]) -> String {
    let max = points.iter().map(|p| p.quantity).max().unwrap_or(0);
    let mut out = String::new();
    for point in points {
        let _ = writeln!(
            out,
            "  {} {} {}",
            point.date,
            scaled_bar(point.quantity as f64, max as f64),
            point.quantity
        );
    }
    out
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        format!("  {}\n", padded.join("  ").trim_end())
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = line(headers.to_vec());
    out.push_str(&line(rule.iter().map(String::as_str).collect()));
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

pub fn render_stores(view: &StoresView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Store Locator");
    let _ = writeln!(out, "Search: {:?}\n", view.search());
    let selected = view.selected();
    out.push_str(&state_or(&view.visible(), stores::LOADING, |list| {
        let mut body = String::new();
        for store in list {
            let marker = if selected == Some(store.store_id.as_str()) { "*" } else { " " };
            let _ = writeln!(body, "{} {} (#{})", marker, store.store_name, store.store_id);
            let _ = writeln!(body, "    {}", store.address);
            let _ = writeln!(body, "    {}", store.city);
            let _ = writeln!(body, "    {}", store.phone);
            if marker == "*" {
                let _ = writeln!(body, "    [View Inventory]");
            }
        }
        body
    }));
    out
}

// ---------------------------------------------------------------------------
// Trending
// ---------------------------------------------------------------------------

pub fn render_trending(view: &TrendingView) -> String {
    state_or(&view.model(), trending::LOADING, trending_body)
}

pub fn trending_body(model: &TrendingModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trending Items\n");
    let _ = writeln!(out, "Increasing Inventory");
    out.push_str(&trend_section(&model.increasing, trending::NO_INCREASING));
    let _ = writeln!(out, "\nDecreasing Inventory");
    out.push_str(&trend_section(&model.decreasing, trending::NO_DECREASING));
    out
}

fn trend_section(cards: &[TrendCard], empty: &str) -> String {
    if cards.is_empty() {
        return format!("  {}\n", empty);
    }
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "  {}", card.name);
        let _ = writeln!(out, "    {}", card.category);
        let _ = writeln!(out, "    {}", dollars(&card.price));
        let _ = writeln!(out, "    {}", card.change);
        let _ = writeln!(out, "    {}", card.quantities);
    }
    out
}
