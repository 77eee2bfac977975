use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use covmort::api::{router, AppState};
use covmort::config::ServerConfig;
use covmort::io::cache::DatasetCache;

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ServerConfig::from_env();
    init_tracing(cfg.log_json);

    // Loaded once; every request shares this handle read-only.
    let cache = DatasetCache::new(cfg.enrichment());
    let dataset = cache
        .get_or_load(&cfg.data_path)
        .with_context(|| format!("failed to load mortality data from {}", cfg.data_path.display()))?;
    let state = AppState::new(dataset);

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .with_context(|| format!("invalid HOST/PORT: {}", cfg.bind_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await.context("bind failed")?;
    info!(%addr, region_labels = ?cfg.region_labels, "covmort api listening");

    axum::serve(listener, router(state)).await.context("server failed")?;
    Ok(())
}
