use std::sync::Arc;

use movies_service::{AppState, app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movies_service=debug".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
