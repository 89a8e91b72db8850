//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the forecasting service plus request defaults
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use salesintel_forecasting::ForecastParameters;
use salesintel_infra::InMemorySalesStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<InMemorySalesStore>, default_parameters: ForecastParameters) -> Router {
    let services = Arc::new(services::AppServices::new(store, default_parameters));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}
