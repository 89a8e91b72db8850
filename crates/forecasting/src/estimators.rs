//! Series estimators: moving average, least-squares trend and weekly seasonal average.
//!
//! All three are total: every input, including an empty series, produces a
//! value. When there is no history at all they return [`BASELINE_FALLBACK`],
//! a placeholder so a freshly seeded catalog still gets a usable (but
//! low-confidence) forecast.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Placeholder estimate used when a series carries no usable history.
pub const BASELINE_FALLBACK: Decimal = dec!(1000);

/// Length of the seasonal cycle (weekly), in day-buckets.
pub const SEASONAL_CYCLE_DAYS: usize = 7;

/// Minimum number of points for a least-squares fit.
const MIN_TREND_POINTS: usize = 2;

/// What an estimator returns when the series is shorter than it needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SmallSample {
    /// Mean of whatever history exists (baseline if none).
    SeriesMean,
    /// The baseline, regardless of what history exists.
    Baseline,
}

/// A series estimator, parameterized by kind.
///
/// Each kind declares its minimum sample size and its small-sample rule; the
/// shared [`Estimator::estimate`] applies them uniformly so fallback values
/// stay consistent across kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Estimator {
    /// Mean of the last `period` points.
    MovingAverage { period: usize },
    /// Least-squares line over the last `period` points, extrapolated one step.
    LinearTrend { period: usize },
    /// Mean of every 7th point starting at phase `day_offset % 7`.
    Seasonal { day_offset: usize },
}

impl Estimator {
    fn min_samples(&self) -> usize {
        match *self {
            Estimator::MovingAverage { period } => period,
            Estimator::LinearTrend { .. } => MIN_TREND_POINTS,
            Estimator::Seasonal { .. } => SEASONAL_CYCLE_DAYS,
        }
    }

    fn small_sample(&self) -> SmallSample {
        match self {
            Estimator::MovingAverage { .. } | Estimator::Seasonal { .. } => SmallSample::SeriesMean,
            Estimator::LinearTrend { .. } => SmallSample::Baseline,
        }
    }

    /// Estimate the next value of `series` (ordered oldest first).
    pub fn estimate(&self, series: &[Decimal]) -> Decimal {
        if series.len() < self.min_samples() {
            return match self.small_sample() {
                SmallSample::SeriesMean => mean_or(series, BASELINE_FALLBACK),
                SmallSample::Baseline => BASELINE_FALLBACK,
            };
        }

        match *self {
            Estimator::MovingAverage { period } => mean_or(last_n(series, period), BASELINE_FALLBACK),
            Estimator::LinearTrend { period } => {
                least_squares_next(last_n(series, period)).unwrap_or(BASELINE_FALLBACK)
            }
            Estimator::Seasonal { day_offset } => {
                let phase = day_offset % SEASONAL_CYCLE_DAYS;
                let same_weekday: Vec<Decimal> = series
                    .iter()
                    .skip(phase)
                    .step_by(SEASONAL_CYCLE_DAYS)
                    .copied()
                    .collect();
                mean_or(&same_weekday, mean_or(series, BASELINE_FALLBACK))
            }
        }
    }
}

/// Mean of the last `period` points, or of the whole series when it is shorter.
pub fn moving_average(series: &[Decimal], period: usize) -> Decimal {
    Estimator::MovingAverage { period }.estimate(series)
}

/// Least-squares extrapolation over the last `period` points.
pub fn linear_trend(series: &[Decimal], period: usize) -> Decimal {
    Estimator::LinearTrend { period }.estimate(series)
}

/// Weekly seasonal average for the forecast day `day_offset`.
pub fn seasonal_average(series: &[Decimal], day_offset: usize) -> Decimal {
    Estimator::Seasonal { day_offset }.estimate(series)
}

/// Arithmetic mean, or `fallback` for an empty slice or one whose mean
/// cannot be represented.
pub(crate) fn mean_or(values: &[Decimal], fallback: Decimal) -> Decimal {
    checked_mean(values).unwrap_or(fallback)
}

/// Arithmetic mean; `None` for an empty slice.
///
/// When the running sum overflows, the mean is accumulated from the
/// pre-divided terms instead, which stays within range.
pub(crate) fn checked_mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let n = Decimal::from(values.len());

    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
        .and_then(|sum| sum.checked_div(n))
        .or_else(|| {
            values
                .iter()
                .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v.checked_div(n)?))
        })
}

fn last_n(values: &[Decimal], n: usize) -> &[Decimal] {
    &values[values.len().saturating_sub(n)..]
}

/// Fit `y = slope * x + intercept` over x = 1..=n and predict x = n + 1.
///
/// A zero denominator (a single point) or an intermediate overflow degrades
/// to the plain mean. Returns `None` only for an empty window, or when even
/// the mean cannot be represented.
pub(crate) fn least_squares_next(window: &[Decimal]) -> Option<Decimal> {
    if window.is_empty() {
        return None;
    }
    fit_next(window).or_else(|| checked_mean(window))
}

/// `None` on a zero denominator or any overflow.
fn fit_next(window: &[Decimal]) -> Option<Decimal> {
    let n = Decimal::from(window.len());
    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    let mut sum_xy = Decimal::ZERO;
    let mut sum_x2 = Decimal::ZERO;
    for (i, y) in window.iter().enumerate() {
        let x = Decimal::from(i + 1);
        sum_x = sum_x.checked_add(x)?;
        sum_y = sum_y.checked_add(*y)?;
        sum_xy = sum_xy.checked_add(x.checked_mul(*y)?)?;
        sum_x2 = sum_x2.checked_add(x.checked_mul(x)?)?;
    }

    let denominator = n.checked_mul(sum_x2)?.checked_sub(sum_x.checked_mul(sum_x)?)?;
    if denominator.is_zero() {
        return None;
    }

    let slope = n
        .checked_mul(sum_xy)?
        .checked_sub(sum_x.checked_mul(sum_y)?)?
        .checked_div(denominator)?;
    let intercept = sum_y.checked_sub(slope.checked_mul(sum_x)?)?.checked_div(n)?;
    slope.checked_mul(n + Decimal::ONE)?.checked_add(intercept)
}
