use anyhow::{Context, Result};
use storefront_pages::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("storefront_pages=info".parse()?),
        )
        .init();

    info!("Starting storefront page server");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    let port = config.port;
    info!(
        "Production mode: {} (root-redirect policy {})",
        config.is_production,
        if config.is_production { "on" } else { "off" }
    );

    let state = server::AppState::from_config(config)?;
    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    let service = axum::ServiceExt::<axum::extract::Request>::into_make_service(app);
    axum::serve(listener, service).await.context("Server error")?;
    Ok(())
}
