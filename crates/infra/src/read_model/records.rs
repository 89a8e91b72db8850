use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesintel_core::{OrderId, ProductId};

/// Lifecycle stage of a sales transaction.
///
/// Only `Invoice` counts as realized history; open `Order`s are committed demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Quotation,
    Order,
    Invoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// Catalog product with its stock figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Stock tracked on the product itself.
    pub stock_quantity: i64,
    /// Stock from the dedicated inventory record, when one exists.
    #[serde(default)]
    pub inventory_stock: Option<i64>,
}

impl ProductRecord {
    /// Inventory record wins over the product's own counter.
    pub fn current_stock(&self) -> i64 {
        self.inventory_stock.unwrap_or(self.stock_quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub total_price: Decimal,
}

/// Quotation, order or invoice with its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: OrderId,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl SalesOrder {
    pub fn is_invoice(&self) -> bool {
        self.order_type == OrderType::Invoice
    }

    /// Open forward-looking order whose lines count as committed demand.
    pub fn is_committed(&self) -> bool {
        self.order_type == OrderType::Order && self.status != OrderStatus::Cancelled
    }
}
