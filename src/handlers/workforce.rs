//! Block C - Workforce

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::domain::models::{FteSummary, PlanningQuery, WorkforceList};
use crate::shared::errors::AppError;
use crate::shared::logging::log_planning_request;

/// GET /workforce
/// List workforce/staffing data
pub async fn list_workforce_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<WorkforceList>, AppError> {
    let Query(query) = query?;
    log_planning_request("workforce", &query.school_id, &query.scenario_id);

    Ok(Json(WorkforceList::empty(query)))
}

/// GET /workforce/fte-summary
/// FTE by subject and contract type
pub async fn get_fte_summary_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<FteSummary>, AppError> {
    let Query(query) = query?;
    log_planning_request("workforce_fte_summary", &query.school_id, &query.scenario_id);

    Ok(Json(FteSummary::empty(query)))
}
