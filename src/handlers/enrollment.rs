//! Block A - Enrollment

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::domain::models::{DivisionList, EnrollmentList, PlanningQuery};
use crate::shared::errors::AppError;
use crate::shared::logging::log_planning_request;

/// GET /enrollment
/// List enrollment data for a school and scenario
pub async fn list_enrollments_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<EnrollmentList>, AppError> {
    let Query(query) = query?;
    log_planning_request("enrollment", &query.school_id, &query.scenario_id);

    Ok(Json(EnrollmentList::empty(query)))
}

/// GET /enrollment/divisions
/// Divisions per grade: ROUNDUP(student_count / max_class_size)
pub async fn get_divisions_handler(
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> Result<Json<DivisionList>, AppError> {
    let Query(query) = query?;
    log_planning_request("enrollment_divisions", &query.school_id, &query.scenario_id);

    Ok(Json(DivisionList::empty(query)))
}
