//! Shared test fixtures for the DABS Explorer integration tests.
//!
//! Provides `FakeGateway`, an in-memory `Gateway` with canned replies per path
//! and a log of every call it received, plus `spawn_api_server()`, which
//! starts a fake DABS API on an ephemeral port for exercising the real HTTP
//! client. Sample payloads mirror the shapes the live API returns.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use dabs_explorer::{DabsError, Gateway, QueryParams, Result};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// FakeGateway
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

/// One request as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: String,
    pub query: String,
}

/// In-memory gateway.
///
/// Replies queued for a path are handed out in order and the last one
/// repeats. A path with nothing queued answers 404.
#[derive(Default)]
pub struct FakeGateway {
    routes: Mutex<HashMap<String, Vec<(Reply, Duration)>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, body: Value) -> Self {
        self.push(path, Reply::Json(body), Duration::ZERO)
    }

    pub fn with_delayed(self, path: &str, body: Value, delay: Duration) -> Self {
        self.push(path, Reply::Json(body), delay)
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.push(path, Reply::Status(status), Duration::ZERO)
    }

    fn push(self, path: &str, reply: Reply, delay: Duration) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push((reply, delay));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn call(&self, path: &str, params: &QueryParams) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            path: path.to_string(),
            query: params.to_query_string(),
        });

        let (reply, delay) = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(path) {
                Some(queue) if queue.len() > 1 => queue.remove(0),
                Some(queue) => queue[0].clone(),
                None => (Reply::Status(404), Duration::ZERO),
            }
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Json(body) => Ok(body),
            Reply::Status(code) => Err(DabsError::Api {
                path: path.to_string(),
                status: Some(code),
                reason: format!("API error: {}", code),
            }),
        }
    }
}

/// A gateway answering every resource with the sample payloads below.
pub fn sample_gateway() -> FakeGateway {
    FakeGateway::new()
        .with("/stats", stats_json())
        .with("/items", items_json(&[("1001", "House Red"), ("1002", "House White")], 45))
        .with("/stores", stores_json())
        .with("/inventory", inventory_json())
        .with("/trending", trending_json())
}

// ---------------------------------------------------------------------------
// Fake HTTP server
// ---------------------------------------------------------------------------

/// Start a fake API under `/prod` on 127.0.0.1 and return its base URL.
///
/// * `/prod/stats` answers the sample stats payload
/// * `/prod/echo` reflects the raw query string and request headers
/// * `/prod/broken` answers 500
/// * `/prod/garbage` answers 200 with a non-JSON body
pub async fn spawn_api_server() -> String {
    let app = Router::new()
        .route("/prod/stats", get(|| async { Json(stats_json()) }))
        .route("/prod/echo", get(echo))
        .route(
            "/prod/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/prod/garbage", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/prod", addr)
}

async fn echo(RawQuery(query): RawQuery, headers: HeaderMap) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "query": query,
        "api_key": header("x-api-key"),
        "content_type": header("content-type"),
    }))
}

/// A base URL nothing is listening on.
pub async fn dead_server_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/prod", addr)
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

pub fn stats_json() -> Value {
    json!({
        "date": "2024-05-01",
        "totalItems": 4521,
        "storeCount": 12,
        "priceStats": {"avgPrice": 24.756, "minPrice": 2.5, "maxPrice": 899.99},
        "categories": [
            {"_id": "WINE", "count": 2000, "avgPrice": 19.5},
            {"_id": "SPIRITS", "count": 1500, "avgPrice": 34.125},
            {"_id": null, "count": 5, "avgPrice": 1.005},
            {"_id": "BEER", "count": 1016, "avgPrice": "12.3"},
            {"_id": "WINE", "count": 1, "avgPrice": 10.0}
        ]
    })
}

pub fn product_json(sku: &str, name: &str) -> Value {
    json!({
        "sku": sku,
        "name": name,
        "displayGroup": "WINE",
        "currentPrice": 12.5,
        "storeQty": 40,
        "warehouseQty": 120
    })
}

pub fn items_json(items: &[(&str, &str)], total: u64) -> Value {
    json!({
        "items": items.iter().map(|(sku, name)| product_json(sku, name)).collect::<Vec<_>>(),
        "total": total
    })
}

pub fn stores_json() -> Value {
    json!({
        "stores": [
            {"store_id": 101, "store_name": "Main St", "address": "1 Main St",
             "city": "Reno", "phone": "555-0101"},
            {"store_id": 102, "store_name": "Oak Ave", "address": "9 Oak Ave",
             "city": "Tahoe", "phone": "555-0102"}
        ]
    })
}

pub fn inventory_json() -> Value {
    json!({
        "inventory": [
            {"record_date": "2024-05-02", "store_id": 101, "store_qty": "35"},
            {"record_date": "2024-05-01", "store_id": 101, "store_qty": 40},
            {"record_date": "2024-05-03", "store_id": 101, "store_qty": "n/a"}
        ]
    })
}

pub fn trending_json() -> Value {
    json!({
        "trending": [
            {"sku": 1, "name": "Rising Red", "displayGroup": "WINE", "price": 15.0,
             "change": 5, "changePercent": 12.5, "previousQty": 40, "currentQty": 45},
            {"sku": 2, "name": "Falling Gin", "displayGroup": "SPIRITS", "price": 30.0,
             "change": -3, "changePercent": -4, "previousQty": 75, "currentQty": 72},
            {"sku": 3, "name": "Steady Ale", "displayGroup": "BEER", "price": null,
             "change": 0, "changePercent": 0, "previousQty": 10, "currentQty": 10}
        ]
    })
}
