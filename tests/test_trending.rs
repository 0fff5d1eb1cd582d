//! Trending view tests.

mod common;

use common::FakeGateway;
use dabs_explorer::models::TrendRecord;
use dabs_explorer::views::{partition_trends, trending, TrendCard, TrendingView};
use serde_json::json;

fn record(sku: &str, change: f64) -> TrendRecord {
    TrendRecord {
        sku: sku.into(),
        change: Some(change),
        ..Default::default()
    }
}

#[test]
fn zero_change_is_in_neither_partition() {
    let report = partition_trends(&[record("1", 5.0), record("2", -3.0), record("3", 0.0)]);

    let up: Vec<&str> = report.increasing.iter().map(|r| r.sku.as_str()).collect();
    let down: Vec<&str> = report.decreasing.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(up, vec!["1"]);
    assert_eq!(down, vec!["2"]);
}

#[test]
fn partition_keeps_server_order() {
    let report = partition_trends(&[record("a", 1.0), record("b", 9.0), record("c", 2.0)]);
    let up: Vec<&str> = report.increasing.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(up, vec!["a", "b", "c"]);
}

#[test]
fn card_signs_rising_change() {
    let rec = TrendRecord {
        name: "Rising Red".into(),
        price: Some(15.0),
        change: Some(5.0),
        change_percent: Some(12.5),
        previous_qty: Some(40),
        current_qty: Some(45),
        ..Default::default()
    };
    let card = TrendCard::from_record(&rec);
    assert_eq!(card.change, "+5 (+12.50%)");
    assert_eq!(card.quantities, "40 \u{2192} 45");
    assert_eq!(card.price, "15.00");
}

#[test]
fn card_keeps_minus_sign_of_falling_change() {
    let rec = TrendRecord {
        change: Some(-3.0),
        change_percent: Some(-4.0),
        ..Default::default()
    };
    let card = TrendCard::from_record(&rec);
    assert_eq!(card.change, "-3 (-4.00%)");
    assert_eq!(card.price, "N/A");
    assert_eq!(card.quantities, "N/A \u{2192} N/A");
}

#[test]
fn card_without_percent_shows_not_available() {
    let rec = TrendRecord {
        change: Some(2.0),
        change_percent: None,
        ..Default::default()
    };
    assert_eq!(TrendCard::from_record(&rec).change, "+2 (N/A)");

    let rec = TrendRecord {
        change: Some(1.0),
        change_percent: Some(2.675),
        ..Default::default()
    };
    assert_eq!(TrendCard::from_record(&rec).change, "+1 (+2.68%)");
}

#[tokio::test]
async fn view_partitions_fetched_payload() {
    let fake = FakeGateway::new().with("/trending", common::trending_json()).shared();
    let mut view = TrendingView::mount(fake);
    view.settle().await;

    let model = view.model().data().cloned().unwrap();
    assert_eq!(model.increasing.len(), 1);
    assert_eq!(model.increasing[0].name, "Rising Red");
    assert_eq!(model.decreasing.len(), 1);
    assert_eq!(model.decreasing[0].sku, "2");
    assert!(model
        .increasing
        .iter()
        .chain(&model.decreasing)
        .all(|c| c.sku != "3"));
}

#[tokio::test]
async fn empty_payload_leaves_both_sides_empty() {
    let fake = FakeGateway::new().with("/trending", json!({"trending": []})).shared();
    let mut view = TrendingView::mount(fake);
    view.settle().await;

    let report = view.report().data().cloned().unwrap();
    assert!(report.increasing.is_empty());
    assert!(report.decreasing.is_empty());
}

#[tokio::test]
async fn failure_shows_trending_message() {
    let fake = FakeGateway::new().with_status("/trending", 500).shared();
    let mut view = TrendingView::mount(fake);
    view.settle().await;

    assert_eq!(view.error().as_deref(), Some(trending::FAILURE));
}
