use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day-bucket of a historical series.
///
/// Days without activity are simply absent; providers do not zero-fill gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }
}

/// Extract the values of a bucketed series, ordered by date ascending.
///
/// Providers already return sorted data; the sort is stable and keeps the
/// estimators independent of that contract.
pub fn values_in_date_order(points: &[TimeSeriesPoint]) -> Vec<Decimal> {
    let mut sorted: Vec<&TimeSeriesPoint> = points.iter().collect();
    sorted.sort_by_key(|p| p.date);
    sorted.into_iter().map(|p| p.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn values_are_returned_in_date_order() {
        let points = vec![
            TimeSeriesPoint::new(day(5), dec!(50)),
            TimeSeriesPoint::new(day(1), dec!(10)),
            TimeSeriesPoint::new(day(3), dec!(30)),
        ];

        assert_eq!(values_in_date_order(&points), vec![dec!(10), dec!(30), dec!(50)]);
    }

    #[test]
    fn gaps_are_not_filled() {
        let points = vec![
            TimeSeriesPoint::new(day(1), dec!(10)),
            TimeSeriesPoint::new(day(20), dec!(20)),
        ];

        assert_eq!(values_in_date_order(&points).len(), 2);
    }
}
