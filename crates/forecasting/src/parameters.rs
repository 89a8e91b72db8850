use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use salesintel_core::{DomainError, DomainResult};

/// Per-call knobs for [`crate::ForecastEngine`].
///
/// Absent fields deserialize to their defaults, so a partial JSON body is a
/// valid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastParameters {
    /// Trailing window of the moving average, in day-buckets.
    pub short_term_period: usize,
    /// Trailing window of the least-squares trend (must be >= 2).
    pub trend_period: usize,
    /// Intended seasonal lookback. Accepted and validated, but the seasonal
    /// cycle itself is always [`crate::SEASONAL_CYCLE_DAYS`].
    pub seasonal_period: usize,
    /// Multiplier applied to the blended estimate to get capacity.
    pub resource_factor: Decimal,
}

impl Default for ForecastParameters {
    fn default() -> Self {
        Self {
            short_term_period: 7,
            trend_period: 30,
            seasonal_period: 90,
            resource_factor: dec!(1.2),
        }
    }
}

impl ForecastParameters {
    pub fn with_short_term_period(mut self, period: usize) -> Self {
        self.short_term_period = period;
        self
    }

    pub fn with_trend_period(mut self, period: usize) -> Self {
        self.trend_period = period;
        self
    }

    pub fn with_seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = period;
        self
    }

    pub fn with_resource_factor(mut self, factor: Decimal) -> Self {
        self.resource_factor = factor;
        self
    }

    /// Reject parameter sets the forecast cannot meaningfully use.
    ///
    /// The engine itself tolerates any values; this check belongs at the
    /// request boundary.
    pub fn validate(&self) -> DomainResult<()> {
        if self.short_term_period == 0 {
            return Err(DomainError::validation("shortTermPeriod must be positive"));
        }
        if self.trend_period < 2 {
            return Err(DomainError::validation("trendPeriod must be at least 2"));
        }
        if self.seasonal_period == 0 {
            return Err(DomainError::validation("seasonalPeriod must be positive"));
        }
        if self.resource_factor <= Decimal::ZERO {
            return Err(DomainError::validation("resourceFactor must be positive"));
        }
        Ok(())
    }
}
