#![recursion_limit = "256"]
mod config;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let leptos_options = get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let app = routes::app(leptos_options, config.site_root.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "eternelles listening");
    axum::serve(listener, app).await.expect("server failed");
}
