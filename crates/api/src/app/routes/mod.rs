use axum::Router;

pub mod forecasting;
pub mod system;

/// Router for all API endpoints except `/health`.
pub fn router() -> Router {
    Router::new().nest("/forecasting", forecasting::router())
}
