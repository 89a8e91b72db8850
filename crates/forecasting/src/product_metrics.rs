//! Sales indicators for a single product's invoiced history.
//!
//! Unlike the catalog-wide estimators these fall back to zero: a product with
//! no invoiced sales in the window has sold nothing, and reporting a baseline
//! would invent demand.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::estimators::{least_squares_next, mean_or, SEASONAL_CYCLE_DAYS};

/// Moving average, trend and weekly indicator for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesMetrics {
    pub moving_average: Decimal,
    pub linear_trend: Decimal,
    pub seasonal: Decimal,
}

impl ProductSalesMetrics {
    /// Compute all three indicators over `series` (ordered oldest first).
    pub fn from_series(series: &[Decimal]) -> Self {
        Self {
            moving_average: Self::moving_average(series),
            linear_trend: Self::linear_trend(series),
            seasonal: Self::seasonal(series),
        }
    }

    /// Mean over the whole window; the caller picks the window via its lookback.
    pub fn moving_average(series: &[Decimal]) -> Decimal {
        mean_or(series, Decimal::ZERO)
    }

    /// Least-squares prediction of the next bucket, zero below two points.
    pub fn linear_trend(series: &[Decimal]) -> Decimal {
        if series.len() < 2 {
            return Decimal::ZERO;
        }
        least_squares_next(series).unwrap_or(Decimal::ZERO)
    }

    /// Mean of the most recent week of buckets, zero below a full week.
    pub fn seasonal(series: &[Decimal]) -> Decimal {
        if series.len() < SEASONAL_CYCLE_DAYS {
            return Decimal::ZERO;
        }
        mean_or(&series[series.len() - SEASONAL_CYCLE_DAYS..], Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_sales_means_zero_everywhere() {
        let m = ProductSalesMetrics::from_series(&[]);
        assert_eq!(m.moving_average, Decimal::ZERO);
        assert_eq!(m.linear_trend, Decimal::ZERO);
        assert_eq!(m.seasonal, Decimal::ZERO);
    }

    #[test]
    fn moving_average_covers_whole_window() {
        assert_eq!(ProductSalesMetrics::moving_average(&[dec!(1), dec!(2), dec!(6)]), dec!(3));
    }

    #[test]
    fn trend_needs_two_points() {
        assert_eq!(ProductSalesMetrics::linear_trend(&[dec!(9)]), Decimal::ZERO);
        assert_eq!(ProductSalesMetrics::linear_trend(&[dec!(2), dec!(4)]), dec!(6));
    }

    #[test]
    fn seasonal_is_last_week_mean() {
        let series: Vec<Decimal> = (1..=10).map(Decimal::from).collect();
        // Last seven: 4..=10
        assert_eq!(ProductSalesMetrics::seasonal(&series), dec!(7));
        assert_eq!(ProductSalesMetrics::seasonal(&series[..6]), Decimal::ZERO);
    }
}
