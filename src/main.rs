use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slay_booking::{app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slay_booking=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    info!("Starting {} booking service", config.business.business_name);
    info!(
        "Catalog: {} services, deposit rate {}",
        config.business.catalog.len(),
        config.business.deposit_rate
    );
    info!("Serving static files from {}", config.static_dir.display());

    let state = AppState::from_config(&config);
    let router = app(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;
    info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
