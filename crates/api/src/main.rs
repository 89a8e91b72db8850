use std::sync::Arc;

use anyhow::Context;

use salesintel_api::config::{self, ApiConfig};
use salesintel_infra::InMemorySalesStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salesintel_observability::init();

    let config = ApiConfig::from_env();

    let store = match &config.seed_path {
        Some(path) => InMemorySalesStore::from_seed(config::load_seed(path)?),
        None => {
            tracing::warn!("SALESINTEL_SEED_PATH not set; starting with an empty sales store");
            InMemorySalesStore::new()
        }
    };
    tracing::info!(
        products = store.product_count(),
        orders = store.order_count(),
        "sales store ready"
    );

    let app = salesintel_api::app::build_app(Arc::new(store), config.default_parameters);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
