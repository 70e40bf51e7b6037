use crate::app_config::AppConfig;
use crate::clock::SystemClock;
use crate::store::LocationStore;
use crate::viewer::{LocationClient, watch};
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task;
use tracing::info;

mod app_config;
mod clock;
mod domain;
mod http;
mod store;
mod viewer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let store = Arc::new(LocationStore::from_config(config.store(), Arc::new(SystemClock)));
    info!("✅  Initialized location store at '{}'", store.path().display());

    if config.viewer().enabled() {
        let client = LocationClient::new(config.viewer().url());
        let poll_interval = config.viewer().poll_interval();
        task::spawn(async move {
            watch(client, poll_interval).await;
        });
        info!("✅  Initialized viewer, polling every {:?}", poll_interval);
    }

    let listener = TcpListener::bind(config.server().address()).await?;
    let app = http::router(store, config.server().endpoint());
    info!(
        "🔥 {} is up and running on {}{}",
        env!("CARGO_PKG_NAME"),
        listener.local_addr()?,
        config.server().endpoint()
    );

    http::serve(listener, app).await?;
    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}
