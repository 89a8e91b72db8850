//! Process configuration, read once from the environment at startup.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::warn;

use salesintel_forecasting::ForecastParameters;
use salesintel_infra::SeedData;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `SALESINTEL_BIND_ADDR`
    pub bind_addr: String,
    /// `SALESINTEL_SEED_PATH`: JSON file loaded into the in-memory sales store.
    pub seed_path: Option<PathBuf>,
    /// Used for any field a forecast request leaves out (`FORECAST_*`).
    pub default_parameters: ForecastParameters,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed_path: None,
            default_parameters: ForecastParameters::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values are logged and
    /// the built-in default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("SALESINTEL_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }
        config.seed_path = lookup("SALESINTEL_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let mut params = config.default_parameters;
        if let Some(v) = parse_var::<usize>(&lookup, "FORECAST_SHORT_TERM_PERIOD") {
            params = params.with_short_term_period(v);
        }
        if let Some(v) = parse_var::<usize>(&lookup, "FORECAST_TREND_PERIOD") {
            params = params.with_trend_period(v);
        }
        if let Some(v) = parse_var::<usize>(&lookup, "FORECAST_SEASONAL_PERIOD") {
            params = params.with_seasonal_period(v);
        }
        if let Some(v) = parse_var::<Decimal>(&lookup, "FORECAST_RESOURCE_FACTOR") {
            params = params.with_resource_factor(v);
        }

        match params.validate() {
            Ok(()) => config.default_parameters = params,
            Err(e) => warn!(error = %e, "ignoring FORECAST_* overrides; using built-in defaults"),
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "invalid configuration value; keeping default");
            None
        }
    }
}

/// Read and parse a JSON seed file for the sales store.
pub fn load_seed(path: &Path) -> anyhow::Result<SeedData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid seed file {}", path.display()))
}
