mod error;
mod routes;
mod state;

use anyhow::Result;
use surge_core::SurgeConfig;
use tracing::info;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = SurgeConfig::from_env()?;
    let state = AppState::new(&config)?;

    info!("Forwarding load tests to {}", state.client.endpoint());
    info!("Serving static files from {}", config.server.static_dir);

    let app = routes::router(state, &config.server.static_dir);

    let addr = format!("0.0.0.0:{}", config.server.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
