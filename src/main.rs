use std::sync::Arc;

use anyhow::Context;
use log::info;
use who_growth::{GrowthConfig, ReferenceStore, api};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GrowthConfig::from_env();

    // The service cannot run without all six tables
    let store = ReferenceStore::load(&config).with_context(|| {
        format!(
            "failed to load WHO reference tables from {} (see data/README.md)",
            config.data_dir.display()
        )
    })?;

    let app = api::create_router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("WHO Growth API listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
