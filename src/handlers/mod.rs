//! Planning API (Axum)
//!
//! Mounted next to the Dioxus app in fullstack mode and served alone by
//! `bin/server.rs`. Handlers are stateless; the only shared data is the
//! immutable `Settings`, passed as an `Extension`.

pub mod dhg;
pub mod enrollment;
pub mod financials;
pub mod health;
pub mod workforce;

use axum::{
    Extension, Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::shared::errors::Result;

pub use dhg::{calculate_dhg_handler, get_dhg_handler};
pub use enrollment::{get_divisions_handler, list_enrollments_handler};
pub use financials::{get_cashflow_handler, get_profit_loss_handler};
pub use health::health_handler;
pub use workforce::{get_fte_summary_handler, list_workforce_handler};

/// Planning routes, relative to the API prefix.
///
/// List endpoints answer both with and without a trailing slash
/// (`/enrollment` and `/enrollment/`).
pub fn planning_routes() -> Router {
    Router::new()
        // Block A - Enrollment
        .route("/enrollment", get(list_enrollments_handler))
        .route("/enrollment/", get(list_enrollments_handler))
        .route("/enrollment/divisions", get(get_divisions_handler))
        // Block C - Workforce
        .route("/workforce", get(list_workforce_handler))
        .route("/workforce/", get(list_workforce_handler))
        .route("/workforce/fte-summary", get(get_fte_summary_handler))
        // DHG
        .route("/dhg", get(get_dhg_handler))
        .route("/dhg/", get(get_dhg_handler))
        .route("/dhg/calculate", post(calculate_dhg_handler))
        // Block D - Financials
        .route("/financials/pl", get(get_profit_loss_handler))
        .route("/financials/cashflow", get(get_cashflow_handler))
}

/// `/health` plus the planning routes under `settings.api_v1_prefix`
pub fn api_router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(&settings.api_v1_prefix, planning_routes())
        .layer(Extension(settings))
}

/// CORS restricted to the configured origins, credentials allowed.
///
/// Methods and headers mirror the preflight request since wildcards are
/// not permitted together with credentials.
pub fn cors_layer(settings: &Settings) -> Result<CorsLayer> {
    let origins: Vec<HeaderValue> = settings.origin_headers()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// API router with CORS and request tracing applied
pub fn service(settings: Arc<Settings>) -> Result<Router> {
    let cors = cors_layer(&settings)?;

    Ok(api_router(settings)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    const SCHOOL: &str = "2f1c6fd4-8f0a-4c55-9d61-3b1f0a6c2e11";
    const SCENARIO: &str = "9b6e2a57-1d3c-4e0f-8a2b-7c5d4e3f2a10";

    fn app() -> Router {
        service(Arc::new(Settings::default())).unwrap()
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn planning_uri(path: &str) -> String {
        format!("/api/v1{path}?school_id={SCHOOL}&scenario_id={SCENARIO}")
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let (status, body) = send(Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_enrollment_echoes_identifiers() {
        let (status, body) = send(Method::GET, &planning_uri("/enrollment")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["school_id"], SCHOOL);
        assert_eq!(body["scenario_id"], SCENARIO);
        assert_eq!(body["enrollments"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_planning_endpoints_ok() {
        for (path, key) in [
            ("/enrollment/divisions", "divisions"),
            ("/workforce", "staff"),
            ("/workforce/fte-summary", "fte_by_subject"),
            ("/dhg", "dhg_by_grade"),
        ] {
            let (status, body) = send(Method::GET, &planning_uri(path)).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body[key], serde_json::json!([]), "{path}");
        }
    }

    #[tokio::test]
    async fn test_dhg_reports_benchmark() {
        let (_, body) = send(Method::GET, &planning_uri("/dhg")).await;
        assert_eq!(body["he_benchmark"], 1.45);
        assert_eq!(body["efficiency_status"], "unknown");
    }

    #[tokio::test]
    async fn test_dhg_calculate_is_post_only() {
        let (status, body) = send(Method::POST, &planning_uri("/dhg/calculate")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "calculated");

        let (status, _) = send(Method::GET, &planning_uri("/dhg/calculate")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_financials_require_fiscal_year() {
        let uri = format!("{}&fiscal_year=2024", planning_uri("/financials/cashflow"));
        let (status, body) = send(Method::GET, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fiscal_year"], 2024);
        assert_eq!(body["currency"], "SAR");
        assert_eq!(body["minimum_balance"], 500000);

        let (status, body) = send(Method::GET, &planning_uri("/financials/pl")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_missing_scenario_is_unprocessable() {
        let uri = format!("/api/v1/workforce?school_id={SCHOOL}");
        let (status, body) = send(Method::GET, &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_QUERY");
        assert!(body["error"].as_str().unwrap().contains("scenario_id"));
    }

    #[tokio::test]
    async fn test_malformed_uuid_is_unprocessable() {
        let uri = format!("/api/v1/dhg?school_id=not-a-uuid&scenario_id={SCENARIO}");
        let (status, _) = send(Method::GET, &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_endpoints_accept_trailing_slash() {
        for (path, key) in [
            ("/enrollment/", "enrollments"),
            ("/workforce/", "staff"),
            ("/dhg/", "dhg_by_grade"),
        ] {
            let (status, body) = send(Method::GET, &planning_uri(path)).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body["school_id"], SCHOOL, "{path}");
            assert_eq!(body[key], serde_json::json!([]), "{path}");
        }
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let settings = Settings {
            api_v1_prefix: "/planning".to_string(),
            ..Settings::default()
        };
        let router = api_router(Arc::new(settings));
        let uri = format!("/planning/dhg?school_id={SCHOOL}&scenario_id={SCENARIO}");
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_only() {
        let preflight = |origin: &'static str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap()
        };

        let response = app().oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );

        let response = app().oneshot(preflight("https://evil.example")).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
