//! `salesintel-forecasting`
//!
//! **Responsibility:** demand forecasting and inventory shortage analysis.
//!
//! Everything in this crate is a pure function of its inputs:
//! - no IO, no clocks, no shared state;
//! - data arrives pre-fetched from the provider layer (`salesintel-infra`);
//! - degenerate inputs (empty or tiny history, zero stock) yield fallback
//!   values instead of errors.

pub mod engine;
pub mod estimators;
pub mod inventory_risk;
pub mod parameters;
pub mod product_metrics;
pub mod series;

pub use engine::{ForecastEngine, ForecastPoint, FORECAST_HORIZON_DAYS, HISTORY_LOOKBACK_DAYS};
pub use estimators::{
    linear_trend, moving_average, seasonal_average, Estimator, BASELINE_FALLBACK, SEASONAL_CYCLE_DAYS,
};
pub use inventory_risk::{InventoryAlert, InventoryRiskAnalyzer, InventorySnapshot, Severity, StockoutHorizon};
pub use parameters::ForecastParameters;
pub use product_metrics::ProductSalesMetrics;
pub use series::TimeSeriesPoint;
