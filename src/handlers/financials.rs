//! Block D - Financials

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};

use crate::domain::models::{CashFlow, FiscalQuery, ProfitLoss};
use crate::shared::errors::AppError;
use crate::shared::logging::log_fiscal_request;

/// GET /financials/pl
/// Profit & Loss statement for one fiscal year
pub async fn get_profit_loss_handler(
    query: Result<Query<FiscalQuery>, QueryRejection>,
) -> Result<Json<ProfitLoss>, AppError> {
    let Query(query) = query?;
    log_fiscal_request("financials_pl", &query.school_id, &query.scenario_id, query.fiscal_year);

    Ok(Json(ProfitLoss::empty(query)))
}

/// GET /financials/cashflow
/// Monthly cash flow projection (tuition tranches Aug/Jan/Apr, monthly salaries)
pub async fn get_cashflow_handler(
    query: Result<Query<FiscalQuery>, QueryRejection>,
) -> Result<Json<CashFlow>, AppError> {
    let Query(query) = query?;
    log_fiscal_request("financials_cashflow", &query.school_id, &query.scenario_id, query.fiscal_year);

    Ok(Json(CashFlow::empty(query)))
}
