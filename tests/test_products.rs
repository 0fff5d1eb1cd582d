//! Product catalog view tests: filters, pagination and request supersession.

mod common;

use std::time::Duration;

use common::FakeGateway;
use dabs_explorer::models::{ItemsPage, ProductRecord};
use dabs_explorer::views::{products, Pagination, ProductCard, ProductsModel, ProductsView};
use dabs_explorer::FetchState;
use serde_json::json;

fn catalog(total: u64) -> FakeGateway {
    FakeGateway::new()
        .with("/stats", common::stats_json())
        .with("/items", common::items_json(&[("1001", "House Red")], total))
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn total_pages_is_ceiling_of_total_over_page_size() {
    assert_eq!(Pagination::new(0, 45, 20).total_pages, 3);
    assert_eq!(Pagination::new(0, 40, 20).total_pages, 2);
    assert_eq!(Pagination::new(0, 1, 20).total_pages, 1);
}

#[test]
fn zero_items_disable_both_controls() {
    let p = Pagination::new(0, 0, 20);
    assert_eq!(p.total_pages, 0);
    assert!(!p.has_previous);
    assert!(!p.has_next);
}

#[test]
fn middle_page_enables_both_controls() {
    let p = Pagination::new(1, 45, 20);
    assert!(p.has_previous);
    assert!(p.has_next);
    assert_eq!(p.label(), "Page 2 of 3");

    let last = Pagination::new(2, 45, 20);
    assert!(!last.has_next);
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

#[test]
fn card_formats_price_and_stock() {
    let record = ProductRecord {
        sku: "1001".into(),
        name: "House Red".into(),
        display_group: Some("WINE".into()),
        current_price: Some(9.5),
        store_qty: Some(40),
        warehouse_qty: None,
    };
    let card = ProductCard::from(&record);
    assert_eq!(card.price, "9.50");
    assert_eq!(card.category, "WINE");
    assert_eq!(card.stock, "In Stock: 40 (Warehouse: N/A)");
}

#[test]
fn summary_counts_page_and_total() {
    let page = ItemsPage {
        items: vec![ProductRecord::default(); 3],
        total: 45,
    };
    let model = ProductsModel::derive(&page, 0);
    assert_eq!(model.summary(), "Showing 3 of 45 products");
    assert_eq!(model.pagination.total_pages, 3);
}

// ---------------------------------------------------------------------------
// ProductsView
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_fetches_categories_and_first_page() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    assert_eq!(fake.calls_to("/stats").len(), 1);
    let items = fake.calls_to("/items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].query, "skip=0&limit=20");

    assert_eq!(view.category_options(), vec!["WINE", "SPIRITS", "BEER"]);
    let model = view.model().data().cloned().unwrap();
    assert_eq!(model.cards[0].name, "House Red");
    assert_eq!(model.pagination.label(), "Page 1 of 3");
}

#[tokio::test]
async fn search_requeries_from_first_page() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;
    assert!(view.next_page());
    view.settle().await;
    assert_eq!(view.filters().page, 1);

    assert!(view.set_search("red wine"));
    view.settle().await;

    assert_eq!(view.filters().page, 0);
    let last = fake.calls_to("/items").pop().unwrap();
    assert_eq!(last.query, "search=red%20wine&skip=0&limit=20");
}

#[tokio::test]
async fn category_change_requeries() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    assert!(view.set_category("SPIRITS"));
    view.settle().await;

    let last = fake.calls_to("/items").pop().unwrap();
    assert_eq!(last.query, "category=SPIRITS&skip=0&limit=20");
}

#[tokio::test]
async fn unchanged_filter_does_not_requery() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    assert!(!view.set_search(""));
    assert!(!view.set_category(""));
    view.settle().await;

    assert_eq!(fake.calls_to("/items").len(), 1);
}

#[tokio::test]
async fn paging_walks_skip_offsets() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    assert!(!view.previous_page());
    assert!(view.next_page());
    view.settle().await;
    assert!(view.next_page());
    view.settle().await;
    // page 3 of 3
    assert!(!view.next_page());
    assert!(view.previous_page());
    view.settle().await;

    let skips: Vec<String> = fake
        .calls_to("/items")
        .into_iter()
        .map(|c| c.query)
        .collect();
    assert_eq!(
        skips,
        vec![
            "skip=0&limit=20",
            "skip=20&limit=20",
            "skip=40&limit=20",
            "skip=20&limit=20",
        ]
    );
}

#[tokio::test]
async fn go_to_page_respects_bounds() {
    let fake = catalog(45).shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    assert!(!view.go_to_page(3));
    assert!(!view.go_to_page(0));
    assert!(view.go_to_page(2));
    view.settle().await;
    assert_eq!(view.filters().page, 2);
    assert_eq!(view.pagination().unwrap().label(), "Page 3 of 3");
}

#[tokio::test]
async fn empty_catalog_disables_paging() {
    let fake = catalog(0).shared();
    let mut view = ProductsView::mount(fake);
    view.settle().await;

    let p = view.pagination().unwrap();
    assert_eq!(p.total_pages, 0);
    assert!(!view.next_page());
    assert!(!view.previous_page());
}

#[tokio::test]
async fn paging_is_disabled_until_a_page_loads() {
    let fake = FakeGateway::new()
        .with("/stats", common::stats_json())
        .with_delayed(
            "/items",
            common::items_json(&[], 100),
            Duration::from_millis(50),
        )
        .shared();
    let mut view = ProductsView::mount(fake);

    assert!(view.is_loading());
    assert!(view.pagination().is_none());
    assert!(!view.next_page());
    view.settle().await;
    assert!(view.next_page());
}

#[tokio::test]
async fn slow_stale_page_never_replaces_newer_result() {
    let fake = FakeGateway::new()
        .with("/stats", common::stats_json())
        .with("/items", common::items_json(&[("1", "Initial")], 1))
        .with_delayed(
            "/items",
            common::items_json(&[("2", "Stale")], 1),
            Duration::from_millis(200),
        )
        .with("/items", common::items_json(&[("3", "Fresh")], 1))
        .shared();
    let mut view = ProductsView::mount(fake.clone());
    view.settle().await;

    view.set_search("a");
    // let the slow request reach the gateway before superseding it
    tokio::time::sleep(Duration::from_millis(20)).await;
    view.set_search("ab");
    view.settle().await;
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert_eq!(fake.calls_to("/items").len(), 3);
    let model = view.model().data().cloned().unwrap();
    assert_eq!(model.cards[0].name, "Fresh");
    assert_eq!(view.filters().search, "ab");
}

#[tokio::test]
async fn item_failure_shows_products_message() {
    let fake = FakeGateway::new()
        .with("/stats", common::stats_json())
        .with_status("/items", 503)
        .shared();
    let mut view = ProductsView::mount(fake);
    view.settle().await;

    assert_eq!(view.error().as_deref(), Some(products::FAILURE));
    assert!(view.pagination().is_none());
}

#[tokio::test]
async fn category_failure_only_empties_dropdown() {
    let fake = FakeGateway::new()
        .with_status("/stats", 500)
        .with("/items", common::items_json(&[("1001", "House Red")], 1))
        .shared();
    let mut view = ProductsView::mount(fake);
    view.settle().await;

    assert!(view.category_options().is_empty());
    assert_eq!(view.error(), None);
    assert!(matches!(view.state(), FetchState::Loaded(_)));
}

#[tokio::test]
async fn falsy_categories_are_left_out_of_dropdown() {
    let fake = FakeGateway::new()
        .with(
            "/stats",
            json!({"categories": [{"_id": 0}, {"_id": false}, {"_id": null}, {"_id": "WINE"}]}),
        )
        .with("/items", common::items_json(&[], 0))
        .shared();
    let mut view = ProductsView::mount(fake);
    view.settle().await;

    assert_eq!(view.category_options(), vec!["WINE"]);
}
