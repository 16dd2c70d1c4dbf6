mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "moviehub host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let server_config = config::ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options);
    let addr = server_config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, api = client::config::api_base_url(), "moviehub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
