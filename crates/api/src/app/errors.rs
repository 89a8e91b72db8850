use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use salesintel_core::DomainError;
use salesintel_infra::{ProviderError, ServiceError};

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ServiceError::Domain(DomainError::InvalidId(msg)) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        ServiceError::Provider(ProviderError::ProductNotFound(id)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("product {id} not found"))
        }
        ServiceError::Provider(ProviderError::Unavailable(msg)) => {
            tracing::error!(error = %msg, "data provider unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "provider_unavailable", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
