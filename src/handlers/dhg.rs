//! DHG (Dotation Horaire Globale)

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::domain::models::{DhgCalculation, DhgSummary, PlanningQuery};
use crate::shared::errors::AppError;
use crate::shared::logging::log_planning_request;

/// GET /dhg
/// Total DHG, DHG by grade and the H/E ratio against the AEFE benchmark
pub async fn get_dhg_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<DhgSummary>, AppError> {
    let Query(query) = query?;
    log_planning_request("dhg", &query.school_id, &query.scenario_id);

    Ok(Json(DhgSummary::empty(query)))
}

/// POST /dhg/calculate
/// Trigger a DHG recalculation from the current enrollment
pub async fn calculate_dhg_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<DhgCalculation>, AppError> {
    let Query(query) = query?;
    log_planning_request("dhg_calculate", &query.school_id, &query.scenario_id);

    Ok(Json(DhgCalculation::calculated(query)))
}
