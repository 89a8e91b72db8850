//! Infrastructure layer: data providers, the in-memory sales store, and the
//! service that feeds provider data into the forecasting engine.

pub mod forecasting_service;
pub mod providers;
pub mod read_model;


pub use forecasting_service::{ForecastingService, ServiceError};
pub use providers::{CommittedDemandProvider, HistoricalSeriesProvider, ProviderError};
pub use read_model::{InMemorySalesStore, SeedData};
