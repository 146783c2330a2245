use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod state;

use movies_backend::config;
use movies_backend::reviews::ReviewStore;
use movies_backend::{Catalog, MovieService};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config()?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Datasets are loaded once; failures degrade to empty stores / 数据只加载一次，失败时降级为空
    let catalog = Catalog::load_or_empty(&app_config.movies_source());
    if catalog.is_empty() {
        tracing::warn!("Movie catalog is empty, every listing and search will return no results");
    }
    let reviews = ReviewStore::load_or_empty(&app_config.reviews_source());

    let state = Arc::new(AppState::new(
        MovieService::new(Arc::new(catalog)),
        Arc::new(reviews),
    ));

    let app = api::router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
