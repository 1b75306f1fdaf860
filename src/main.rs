//! Plan-It - Main Entry Point
//!
//! Serves the Dioxus application together with the planning API.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use plan_it::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use plan_it::config::Settings;
    use plan_it::handlers;
    use plan_it::shared::logging::{init_tracing, log_startup};
    use std::sync::Arc;

    // argv belongs to the Dioxus CLI here, settings come from the environment
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing BEFORE dioxus::serve
    init_tracing(settings.debug);
    log_startup(
        &settings.app_name,
        &settings.app_version,
        &settings.environment,
        &settings.api_v1_prefix,
    );

    let settings = Arc::new(settings);

    dioxus::serve(move || {
        let settings = settings.clone();
        async move {
            let api = handlers::service(settings)?;

            // Get the base Dioxus router and mount the API next to it
            let router = dioxus::server::router(App).merge(api);

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Plan-It - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
