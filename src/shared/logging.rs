//! Structured logging module for Plan-It
//!
//! Provides consistent, contextual logging across the server.
//! Every event carries an `operation` field so logs can be filtered per concern.

use uuid::Uuid;

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Startup,
    ApiRequest,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Startup => "startup",
            LogOperation::ApiRequest => "api_request",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` in debug mode.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(debug: bool) {
    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A second init (tests, fullstack hot reload) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log server startup
pub fn log_startup(app_name: &str, version: &str, environment: &str, api_prefix: &str) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        app_name = app_name,
        version = version,
        environment = environment,
        api_prefix = api_prefix,
        "Starting application"
    );
}

/// Log the address a standalone server is listening on
pub fn log_listening(addr: &std::net::SocketAddr) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        address = %addr,
        "Server listening"
    );
}

/// Log a planning API request scoped to a school and scenario
pub fn log_planning_request(endpoint: &str, school_id: &Uuid, scenario_id: &Uuid) {
    tracing::info!(
        operation = LogOperation::ApiRequest.as_str(),
        endpoint = endpoint,
        school_id = %school_id,
        scenario_id = %scenario_id,
        "Planning request"
    );
}

/// Log a planning API request scoped to a fiscal year
pub fn log_fiscal_request(endpoint: &str, school_id: &Uuid, scenario_id: &Uuid, fiscal_year: i32) {
    tracing::info!(
        operation = LogOperation::ApiRequest.as_str(),
        endpoint = endpoint,
        school_id = %school_id,
        scenario_id = %scenario_id,
        fiscal_year = fiscal_year,
        "Fiscal planning request"
    );
}

/// Log workspace route changes
pub fn log_route_change(path: &str, active: Option<&str>) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        active_entry = active.unwrap_or("none"),
        "Workspace route changed"
    );
}
