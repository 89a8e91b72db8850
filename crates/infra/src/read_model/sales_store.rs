use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesintel_core::ProductId;
use salesintel_forecasting::{InventorySnapshot, TimeSeriesPoint};

use crate::providers::{CommittedDemandProvider, HistoricalSeriesProvider, ProviderError};
use crate::read_model::records::{ProductRecord, SalesOrder};

/// Initial contents for an [`InMemorySalesStore`] (e.g. a JSON seed file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub products: Vec<ProductRecord>,
    pub orders: Vec<SalesOrder>,
}

/// In-memory sales store for tests/dev.
///
/// Products are keyed by id in a `BTreeMap`; UUIDv7 ids make snapshot order
/// follow creation order.
#[derive(Debug, Default)]
pub struct InMemorySalesStore {
    products: RwLock<BTreeMap<ProductId, ProductRecord>>,
    orders: RwLock<Vec<SalesOrder>>,
}

impl InMemorySalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        for product in seed.products {
            store.upsert_product(product);
        }
        for order in seed.orders {
            store.record_order(order);
        }
        store
    }

    pub fn upsert_product(&self, product: ProductRecord) {
        if let Ok(mut map) = self.products.write() {
            map.insert(product.id, product);
        }
    }

    pub fn record_order(&self, order: SalesOrder) {
        if let Ok(mut orders) = self.orders.write() {
            orders.push(order);
        }
    }

    pub fn product_count(&self) -> usize {
        self.products.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().map(|o| o.len()).unwrap_or(0)
    }

    fn read_orders(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<SalesOrder>>, ProviderError> {
        self.orders
            .read()
            .map_err(|_| ProviderError::unavailable("sales order store lock poisoned"))
    }

    fn read_products(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<ProductId, ProductRecord>>, ProviderError> {
        self.products
            .read()
            .map_err(|_| ProviderError::unavailable("product store lock poisoned"))
    }
}

fn in_window(order: &SalesOrder, since: NaiveDate, until: NaiveDate) -> bool {
    let day = order.order_date.date_naive();
    since <= day && day <= until
}

fn into_points(buckets: BTreeMap<NaiveDate, Decimal>) -> Vec<TimeSeriesPoint> {
    buckets
        .into_iter()
        .map(|(date, value)| TimeSeriesPoint::new(date, value))
        .collect()
}

impl HistoricalSeriesProvider for InMemorySalesStore {
    fn daily_invoice_totals(
        &self,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        let orders = self.read_orders()?;

        let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.is_invoice() && in_window(o, since, until)) {
            *buckets.entry(order.order_date.date_naive()).or_insert(Decimal::ZERO) += order.total_amount;
        }

        Ok(into_points(buckets))
    }

    fn product_daily_invoice_totals(
        &self,
        product_id: ProductId,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        if !self.read_products()?.contains_key(&product_id) {
            return Err(ProviderError::ProductNotFound(product_id));
        }

        let orders = self.read_orders()?;

        let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.is_invoice() && in_window(o, since, until)) {
            for line in order.lines.iter().filter(|l| l.product_id == product_id) {
                *buckets.entry(order.order_date.date_naive()).or_insert(Decimal::ZERO) += line.total_price;
            }
        }

        Ok(into_points(buckets))
    }
}

impl CommittedDemandProvider for InMemorySalesStore {
    fn inventory_snapshots(&self) -> Result<Vec<InventorySnapshot>, ProviderError> {
        let products = self.read_products()?;
        let orders = self.read_orders()?;

        let mut committed: BTreeMap<ProductId, i64> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.is_committed()) {
            for line in &order.lines {
                *committed.entry(line.product_id).or_insert(0) += line.quantity;
            }
        }

        Ok(products
            .values()
            .map(|p| InventorySnapshot {
                product_id: p.id,
                product_name: p.name.clone(),
                sku: p.sku.clone(),
                current_stock: p.current_stock(),
                committed_demand: committed.get(&p.id).copied().unwrap_or(0),
            })
            .collect())
    }
}
