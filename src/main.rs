//! MediLocate web host.
//!
//! Serves the server-rendered Leptos client and its WASM bundle. All data
//! lives behind the separate MediLocate REST backend; this process only
//! tells the browser where to find it.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "medilocate host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = leptos::prelude::get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;

    let app = routes::app(leptos_options, &config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, api_base = %config.api_base, "medilocate listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
