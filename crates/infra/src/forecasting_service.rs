//! Fetches data through the providers and runs the forecasting components on it.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use salesintel_core::{DomainError, ProductId};
use salesintel_forecasting::{
    ForecastEngine, ForecastParameters, ForecastPoint, InventoryAlert, InventoryRiskAnalyzer,
    ProductSalesMetrics, HISTORY_LOOKBACK_DAYS,
};

use crate::providers::{CommittedDemandProvider, HistoricalSeriesProvider, ProviderError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Request-scoped orchestration over a data provider.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Debug)]
pub struct ForecastingService<P> {
    provider: P,
    engine: ForecastEngine,
    analyzer: InventoryRiskAnalyzer,
}

/// First day of a lookback window ending at `until` (inclusive).
fn window_start(until: NaiveDate, days: u32) -> NaiveDate {
    until.checked_sub_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MIN)
}

impl<P> ForecastingService<P>
where
    P: HistoricalSeriesProvider + CommittedDemandProvider,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            engine: ForecastEngine::new(),
            analyzer: InventoryRiskAnalyzer::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 30-day forecast from the invoice history of the last 90 days.
    pub fn generate_forecast(
        &self,
        params: &ForecastParameters,
        reference_date: NaiveDate,
    ) -> Result<Vec<ForecastPoint>, ServiceError> {
        params.validate()?;

        let since = window_start(reference_date, HISTORY_LOOKBACK_DAYS);
        let history = self.provider.daily_invoice_totals(since, reference_date)?;

        info!(
            short_term_period = params.short_term_period,
            trend_period = params.trend_period,
            seasonal_period = params.seasonal_period,
            resource_factor = %params.resource_factor,
            history_days = history.len(),
            %reference_date,
            "generating forecast"
        );

        Ok(self.engine.generate(&history, params, reference_date))
    }

    /// Shortage alerts for the whole catalog, most severe first.
    pub fn inventory_alerts(&self) -> Result<Vec<InventoryAlert>, ServiceError> {
        let snapshots = self.provider.inventory_snapshots()?;
        let alerts = self.analyzer.detect_alerts(&snapshots);

        info!(products = snapshots.len(), alerts = alerts.len(), "generated inventory alerts");
        Ok(alerts)
    }

    /// Sales indicators for one product over the last `days` days.
    pub fn product_metrics(
        &self,
        product_id: ProductId,
        days: u32,
        reference_date: NaiveDate,
    ) -> Result<ProductSalesMetrics, ServiceError> {
        let since = window_start(reference_date, days);
        let series: Vec<Decimal> = self
            .provider
            .product_daily_invoice_totals(product_id, since, reference_date)?
            .into_iter()
            .map(|p| p.value)
            .collect();

        debug!(%product_id, days, points = series.len(), "computing product sales metrics");
        Ok(ProductSalesMetrics::from_series(&series))
    }

    /// Mean daily invoiced amount for one product over the last `days` days.
    pub fn product_moving_average(
        &self,
        product_id: ProductId,
        days: u32,
        reference_date: NaiveDate,
    ) -> Result<Decimal, ServiceError> {
        Ok(self.product_metrics(product_id, days, reference_date)?.moving_average)
    }
}
