use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesintel_forecasting::ForecastParameters;

// -------------------------
// Request DTOs
// -------------------------

/// Forecast request body; absent fields take the configured defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastParametersRequest {
    pub short_term_period: Option<usize>,
    pub trend_period: Option<usize>,
    pub seasonal_period: Option<usize>,
    pub resource_factor: Option<Decimal>,
}

impl ForecastParametersRequest {
    pub fn resolve(self, defaults: ForecastParameters) -> ForecastParameters {
        ForecastParameters {
            short_term_period: self.short_term_period.unwrap_or(defaults.short_term_period),
            trend_period: self.trend_period.unwrap_or(defaults.trend_period),
            seasonal_period: self.seasonal_period.unwrap_or(defaults.seasonal_period),
            resource_factor: self.resource_factor.unwrap_or(defaults.resource_factor),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MovingAverageQuery {
    pub days: Option<u32>,
}

// -------------------------
// Response DTOs
// -------------------------

/// A bare decimal body, written as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecimalNumber(#[serde(with = "rust_decimal::serde::float")] pub Decimal);
