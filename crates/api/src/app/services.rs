use std::sync::Arc;

use salesintel_forecasting::ForecastParameters;
use salesintel_infra::{ForecastingService, InMemorySalesStore};

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppServices {
    forecasting: ForecastingService<Arc<InMemorySalesStore>>,
    default_parameters: ForecastParameters,
}

impl AppServices {
    pub fn new(store: Arc<InMemorySalesStore>, default_parameters: ForecastParameters) -> Self {
        Self {
            forecasting: ForecastingService::new(store),
            default_parameters,
        }
    }

    pub fn forecasting(&self) -> &ForecastingService<Arc<InMemorySalesStore>> {
        &self.forecasting
    }

    pub fn default_parameters(&self) -> ForecastParameters {
        self.default_parameters
    }
}
