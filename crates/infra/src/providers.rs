//! Data contracts the forecasting engine needs from the transactional store.
//!
//! Providers do all the IO; the engine only ever sees the plain data they
//! return. Failures are reported here, never inside the forecast math.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use salesintel_core::ProductId;
use salesintel_forecasting::{InventorySnapshot, TimeSeriesPoint};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing store could not be read.
    #[error("data provider unavailable: {0}")]
    Unavailable(String),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

impl ProviderError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Day-bucketed history of finalized (invoice-stage) transactions.
pub trait HistoricalSeriesProvider: Send + Sync {
    /// Summed invoice totals per day for `since..=until`, ascending.
    ///
    /// Only days with at least one invoice appear; gaps are not zero-filled.
    fn daily_invoice_totals(
        &self,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError>;

    /// Summed invoice line totals per day for one product, ascending.
    fn product_daily_invoice_totals(
        &self,
        product_id: ProductId,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError>;
}

/// Current stock and committed (open, non-cancelled order) demand per product.
pub trait CommittedDemandProvider: Send + Sync {
    /// One snapshot per catalog product, in a stable order.
    fn inventory_snapshots(&self) -> Result<Vec<InventorySnapshot>, ProviderError>;
}

impl<P> HistoricalSeriesProvider for Arc<P>
where
    P: HistoricalSeriesProvider + ?Sized,
{
    fn daily_invoice_totals(
        &self,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        (**self).daily_invoice_totals(since, until)
    }

    fn product_daily_invoice_totals(
        &self,
        product_id: ProductId,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        (**self).product_daily_invoice_totals(product_id, since, until)
    }
}

impl<P> CommittedDemandProvider for Arc<P>
where
    P: CommittedDemandProvider + ?Sized,
{
    fn inventory_snapshots(&self) -> Result<Vec<InventorySnapshot>, ProviderError> {
        (**self).inventory_snapshots()
    }
}
