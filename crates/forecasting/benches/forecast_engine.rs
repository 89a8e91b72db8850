use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use salesintel_core::ProductId;
use salesintel_forecasting::{
    ForecastEngine, ForecastParameters, InventoryRiskAnalyzer, InventorySnapshot, TimeSeriesPoint,
};

fn history(len: usize, today: NaiveDate) -> Vec<TimeSeriesPoint> {
    (0..len)
        .map(|i| {
            let date = today - Days::new((len - i) as u64);
            // Weekly ripple on top of a slow upward drift.
            let cents = 100_000 + (i as i64) * 150 + ((i % 7) as i64) * 2_500;
            TimeSeriesPoint::new(date, Decimal::new(cents, 2))
        })
        .collect()
}

fn bench_forecast_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_generation");
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let engine = ForecastEngine::new();
    let params = ForecastParameters::default();

    for history_len in [0usize, 7, 30, 90].iter() {
        group.throughput(Throughput::Elements(*history_len as u64));
        group.bench_with_input(
            BenchmarkId::new("history_days", history_len),
            history_len,
            |b, &len| {
                let series = history(len, today);
                b.iter(|| engine.generate(black_box(&series), black_box(&params), today));
            },
        );
    }

    group.finish();
}

fn bench_alert_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("alert_detection");
    let analyzer = InventoryRiskAnalyzer::new();

    for catalog_size in [10usize, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*catalog_size as u64));
        group.bench_with_input(
            BenchmarkId::new("snapshots", catalog_size),
            catalog_size,
            |b, &size| {
                let snapshots: Vec<InventorySnapshot> = (0..size)
                    .map(|i| InventorySnapshot {
                        product_id: ProductId::new(),
                        product_name: format!("Product {i}"),
                        sku: format!("SKU-{i:05}"),
                        current_stock: (i % 50) as i64,
                        committed_demand: (i % 80) as i64,
                    })
                    .collect();

                b.iter(|| analyzer.detect_alerts(black_box(&snapshots)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_forecast_generation, bench_alert_detection);
criterion_main!(benches);
