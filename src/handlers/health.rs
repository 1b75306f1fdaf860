use axum::{Extension, Json};
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::models::HealthStatus;

/// GET /health
pub async fn health_handler(Extension(settings): Extension<Arc<Settings>>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(settings.app_version.clone()))
}
