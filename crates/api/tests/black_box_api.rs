use std::sync::Arc;

use chrono::{Days, Utc};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use salesintel_core::{OrderId, ProductId};
use salesintel_forecasting::ForecastParameters;
use salesintel_infra::read_model::{OrderLine, OrderStatus, OrderType, ProductRecord, SalesOrder};
use salesintel_infra::InMemorySalesStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(store: Arc<InMemorySalesStore>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = salesintel_api::app::build_app(store, ForecastParameters::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn product(name: &str, stock: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(),
        name: name.to_string(),
        sku: format!("SKU-{name}"),
        stock_quantity: stock,
        inventory_stock: None,
    }
}

fn order(order_type: OrderType, days_ago: u64, total: Decimal, lines: Vec<OrderLine>) -> SalesOrder {
    SalesOrder {
        id: OrderId::new(),
        order_type,
        status: OrderStatus::Confirmed,
        order_date: Utc::now() - Days::new(days_ago),
        total_amount: total,
        lines,
    }
}

fn line(product_id: ProductId, quantity: i64, total: Decimal) -> OrderLine {
    OrderLine {
        product_id,
        quantity,
        total_price: total,
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn(Arc::new(InMemorySalesStore::new())).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn forecast_on_empty_store_returns_thirty_baseline_points() {
    let srv = TestServer::spawn(Arc::new(InMemorySalesStore::new())).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/forecasting/generate", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 30);
    assert_eq!(points[0]["movingAverage"].as_f64(), Some(1000.0));
    assert_eq!(points[0]["capacity"].as_f64(), Some(1200.0));
}

#[tokio::test]
async fn forecast_blends_invoice_history() {
    let store = Arc::new(InMemorySalesStore::new());
    for days_ago in 1..=14 {
        store.record_order(order(OrderType::Invoice, days_ago, dec!(250), vec![]));
    }
    store.record_order(order(OrderType::Quotation, 2, dec!(99999), vec![]));
    let srv = TestServer::spawn(store).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/forecasting/generate", srv.base_url))
        .json(&json!({ "resourceFactor": 2 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    for p in body.as_array().unwrap() {
        assert_eq!(p["movingAverage"].as_f64(), Some(250.0));
        assert_eq!(p["capacity"].as_f64(), Some(500.0));
    }
}

#[tokio::test]
async fn invalid_forecast_parameters_are_rejected() {
    let srv = TestServer::spawn(Arc::new(InMemorySalesStore::new())).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/forecasting/generate", srv.base_url))
        .json(&json!({ "trendPeriod": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn inventory_alerts_are_ranked_by_severity() {
    let store = Arc::new(InMemorySalesStore::new());
    let plenty = product("plenty", 100);
    let medium = product("medium", 30);
    let critical = product("critical", 3);
    let high = product("high", 15);
    let ids = [plenty.id, medium.id, critical.id, high.id];
    for p in [plenty, medium, critical, high] {
        store.upsert_product(p);
    }
    let demand = [50, 35, 10, 20];
    for (id, qty) in ids.iter().zip(demand) {
        store.record_order(order(OrderType::Order, 0, Decimal::ZERO, vec![line(*id, qty, Decimal::ZERO)]));
    }
    let srv = TestServer::spawn(store).await;

    let res = reqwest::get(format!("{}/forecasting/inventory-alerts", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let alerts = body.as_array().unwrap();
    let severities: Vec<&str> = alerts.iter().map(|a| a["severity"].as_str().unwrap()).collect();
    assert_eq!(severities, vec!["critical", "high", "medium"]);
    assert_eq!(alerts[0]["productName"], "critical");
    assert_eq!(alerts[0]["shortfall"], 7);
    assert_eq!(alerts[0]["daysUntilStockout"], 9);
}

#[tokio::test]
async fn moving_average_for_product() {
    let store = Arc::new(InMemorySalesStore::new());
    let lamp = product("lamp", 5);
    let lamp_id = lamp.id;
    store.upsert_product(lamp);
    store.record_order(order(OrderType::Invoice, 1, dec!(40), vec![line(lamp_id, 2, dec!(40))]));
    store.record_order(order(OrderType::Invoice, 3, dec!(20), vec![line(lamp_id, 1, dec!(20))]));
    let srv = TestServer::spawn(store).await;

    let res = reqwest::get(format!("{}/forecasting/moving-average/{}?days=7", srv.base_url, lamp_id))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body.as_f64(), Some(30.0));
}

#[tokio::test]
async fn moving_average_rejects_bad_or_unknown_products() {
    let srv = TestServer::spawn(Arc::new(InMemorySalesStore::new())).await;

    let res = reqwest::get(format!("{}/forecasting/moving-average/not-a-uuid", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = reqwest::get(format!(
        "{}/forecasting/moving-average/{}",
        srv.base_url,
        ProductId::new()
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}
