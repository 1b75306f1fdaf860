//! Standalone API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: PORT=3003 cargo run --bin server --features server

use anyhow::Context;
use std::sync::Arc;

use plan_it::config::Settings;
use plan_it::handlers;
use plan_it::shared::logging::{init_tracing, log_listening, log_startup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    init_tracing(settings.debug);
    log_startup(
        &settings.app_name,
        &settings.app_version,
        &settings.environment,
        &settings.api_v1_prefix,
    );

    let addr = settings.bind_addr();
    let app = handlers::service(Arc::new(settings))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log_listening(&addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
