use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::estimators::{Estimator, SEASONAL_CYCLE_DAYS};
use crate::parameters::ForecastParameters;
use crate::series::{values_in_date_order, TimeSeriesPoint};

/// Number of days projected forward per forecast run.
pub const FORECAST_HORIZON_DAYS: usize = 30;

/// How far back the historical series reaches, in days.
///
/// Fixed; independent of `ForecastParameters::seasonal_period`.
pub const HISTORY_LOOKBACK_DAYS: u32 = 90;

/// Decimal places kept on every emitted value.
const OUTPUT_SCALE: u32 = 2;

/// One projected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub moving_average: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub linear_trend: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub seasonal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub capacity: Decimal,
}

/// Blends the three series estimators into a 30-day capacity forecast.
///
/// Model:
/// - moving average and linear trend are computed once from the whole history
///   and repeated on every day;
/// - the seasonal term varies with the day's position in the weekly cycle;
/// - capacity = mean of the three terms, scaled by `resource_factor`.
///
/// The resulting curve is flat apart from a 7-day ripple. This shape is
/// deliberate; do not turn it into a rolling forecast.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// Project [`FORECAST_HORIZON_DAYS`] days starting at `reference_date`.
    ///
    /// `history` is the bucketed series for the lookback window (any order,
    /// gaps allowed). Never fails: sparse history degrades to the estimator
    /// fallbacks, and values too large for `Decimal` arithmetic degrade to
    /// means or saturate.
    ///
    /// Dates are only produced up to `NaiveDate::MAX`; a reference date within
    /// 30 days of it yields a shorter forecast ending on that date.
    pub fn generate(
        &self,
        history: &[TimeSeriesPoint],
        params: &ForecastParameters,
        reference_date: NaiveDate,
    ) -> Vec<ForecastPoint> {
        let series = values_in_date_order(history);

        let moving_average = Estimator::MovingAverage {
            period: params.short_term_period,
        }
        .estimate(&series);
        let linear_trend = Estimator::LinearTrend {
            period: params.trend_period,
        }
        .estimate(&series);

        // Only SEASONAL_CYCLE_DAYS distinct seasonal values exist.
        let seasonal_by_phase: Vec<Decimal> = (0..SEASONAL_CYCLE_DAYS)
            .map(|day_offset| Estimator::Seasonal { day_offset }.estimate(&series))
            .collect();

        let blend_divisor = Decimal::from(3);

        (0..FORECAST_HORIZON_DAYS)
            .map_while(|offset| {
                let date = reference_date.checked_add_days(Days::new(offset as u64))?;
                Some((offset, date))
            })
            .map(|(offset, date)| {
                let seasonal = seasonal_by_phase[offset % SEASONAL_CYCLE_DAYS];
                let capacity = blend(&[moving_average, linear_trend, seasonal], blend_divisor)
                    .saturating_mul(params.resource_factor);

                ForecastPoint {
                    date,
                    moving_average: moving_average.round_dp(OUTPUT_SCALE),
                    linear_trend: linear_trend.round_dp(OUTPUT_SCALE),
                    seasonal: seasonal.round_dp(OUTPUT_SCALE),
                    capacity: capacity.round_dp(OUTPUT_SCALE),
                }
            })
            .collect()
    }
}

/// Mean of the three terms. Falls back to summing pre-divided terms when
/// the plain sum overflows; each third is at most a third of the range.
fn blend(terms: &[Decimal; 3], divisor: Decimal) -> Decimal {
    terms
        .iter()
        .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(*t))
        .map(|sum| sum / divisor)
        .unwrap_or_else(|| {
            terms
                .iter()
                .fold(Decimal::ZERO, |acc, t| acc.saturating_add(*t / divisor))
        })
}
