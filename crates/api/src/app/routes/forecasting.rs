use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use salesintel_core::ProductId;
use salesintel_infra::ServiceError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Default lookback for the per-product moving average.
const DEFAULT_MOVING_AVERAGE_DAYS: u32 = 7;

pub fn router() -> Router {
    Router::new()
        .route("/generate", post(generate_forecast))
        .route("/inventory-alerts", get(get_inventory_alerts))
        .route("/moving-average/:product_id", get(get_moving_average))
}

pub async fn generate_forecast(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ForecastParametersRequest>,
) -> axum::response::Response {
    let params = body.resolve(services.default_parameters());
    let today = Utc::now().date_naive();

    match services.forecasting().generate_forecast(&params, today) {
        Ok(points) => (StatusCode::OK, Json(points)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_inventory_alerts(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.forecasting().inventory_alerts() {
        Ok(alerts) => (StatusCode::OK, Json(alerts)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_moving_average(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
    Query(query): Query<dto::MovingAverageQuery>,
) -> axum::response::Response {
    let product_id: ProductId = match product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::service_error_to_response(ServiceError::Domain(e)),
    };

    let days = query.days.unwrap_or(DEFAULT_MOVING_AVERAGE_DAYS);
    if days == 0 {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "days must be positive");
    }

    let today = Utc::now().date_naive();
    match services.forecasting().product_moving_average(product_id, days, today) {
        Ok(moving_average) => (StatusCode::OK, Json(dto::DecimalNumber(moving_average))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
