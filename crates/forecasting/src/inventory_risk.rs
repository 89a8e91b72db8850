//! Shortage detection: current stock versus committed (not yet invoiced) demand.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use salesintel_core::ProductId;

/// Days over which committed demand is assumed to be consumed evenly.
const CONSUMPTION_WINDOW_DAYS: f64 = 30.0;

const CRITICAL_RATIO: Decimal = dec!(2.0);
const HIGH_RATIO: Decimal = dec!(1.0);
const CRITICAL_STOCK_FLOOR: i64 = 5;
const HIGH_STOCK_FLOOR: i64 = 20;

/// Stock position of one product, as supplied by the committed-demand provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
    /// Sum of quantities on open, non-cancelled order lines.
    pub committed_demand: i64,
}

/// How urgent a shortage is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    /// Classify a positive shortfall.
    ///
    /// Either the relative ratio or the absolute stock floor escalates on its own.
    pub fn classify(shortfall: i64, current_stock: i64) -> Self {
        let ratio = Decimal::from(shortfall) / Decimal::from(current_stock.max(1));

        if ratio >= CRITICAL_RATIO || current_stock <= CRITICAL_STOCK_FLOOR {
            Severity::Critical
        } else if ratio >= HIGH_RATIO || current_stock <= HIGH_STOCK_FLOOR {
            Severity::High
        } else {
            Severity::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }

    /// Sort rank, highest first. Only used for ordering alerts.
    pub(crate) fn weight(&self) -> u8 {
        match self {
            Severity::Critical => 3,
            Severity::High => 2,
            Severity::Medium => 1,
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated time until stock runs out.
///
/// Serialized as a plain integer, or `null` when there is no consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockoutHorizon {
    Days(u32),
    Unbounded,
}

impl StockoutHorizon {
    /// Assume committed demand is consumed evenly over 30 days.
    pub fn estimate(current_stock: i64, committed_demand: i64) -> Self {
        if committed_demand <= 0 {
            return StockoutHorizon::Unbounded;
        }

        let daily_consumption = committed_demand as f64 / CONSUMPTION_WINDOW_DAYS;
        let days = (current_stock as f64 / daily_consumption).ceil().max(1.0);
        // Float-to-int casts saturate.
        StockoutHorizon::Days(days as u32)
    }

    pub fn days(&self) -> Option<u32> {
        match self {
            StockoutHorizon::Days(d) => Some(*d),
            StockoutHorizon::Unbounded => None,
        }
    }
}

/// A product whose committed demand exceeds its stock.
///
/// Only [`InventoryRiskAnalyzer`] builds alerts, so `shortfall` and `severity`
/// always agree with the stock figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlert {
    product_id: ProductId,
    product_name: String,
    sku: String,
    current_stock: i64,
    committed_demand: i64,
    shortfall: i64,
    severity: Severity,
    days_until_stockout: StockoutHorizon,
}

impl InventoryAlert {
    fn from_snapshot(snapshot: &InventorySnapshot) -> Option<Self> {
        let shortfall = snapshot.committed_demand.saturating_sub(snapshot.current_stock);
        if shortfall <= 0 {
            return None;
        }

        Some(Self {
            product_id: snapshot.product_id,
            product_name: snapshot.product_name.clone(),
            sku: snapshot.sku.clone(),
            current_stock: snapshot.current_stock,
            committed_demand: snapshot.committed_demand,
            shortfall,
            severity: Severity::classify(shortfall, snapshot.current_stock),
            days_until_stockout: StockoutHorizon::estimate(snapshot.current_stock, snapshot.committed_demand),
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn committed_demand(&self) -> i64 {
        self.committed_demand
    }

    pub fn shortfall(&self) -> i64 {
        self.shortfall
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn days_until_stockout(&self) -> StockoutHorizon {
        self.days_until_stockout
    }
}

/// Turns inventory snapshots into severity-ranked shortage alerts.
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryRiskAnalyzer;

impl InventoryRiskAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Alerts for every snapshot with committed demand above stock.
    ///
    /// Ordered critical, high, medium; equal severities keep input order.
    pub fn detect_alerts(&self, snapshots: &[InventorySnapshot]) -> Vec<InventoryAlert> {
        let mut alerts: Vec<InventoryAlert> = snapshots.iter().filter_map(InventoryAlert::from_snapshot).collect();
        // `sort_by` is stable.
        alerts.sort_by(|a, b| b.severity.weight().cmp(&a.severity.weight()));
        alerts
    }
}
