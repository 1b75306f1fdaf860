//! Request and response shapes of the planning API.
//!
//! The calculation engines behind these blocks (enrollment divisions, DHG,
//! P&L, cash flow) are not implemented yet, so collections are always empty
//! and figures are zero. The envelopes still carry the request identifiers
//! so clients can wire against the final shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// H/E ratio benchmark for AEFE schools
pub const HE_BENCHMARK: f64 = 1.45;

/// Treasury floor used by the cash-flow projection, in SAR
pub const MINIMUM_CASH_BALANCE: i64 = 500_000;

/// Reporting currency
pub const CURRENCY: &str = "SAR";

/// `?school_id=&scenario_id=` shared by every block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanningQuery {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
}

/// Planning query scoped to one fiscal year (e.g. 2024)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FiscalQuery {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub fiscal_year: i32,
}

// ============================================================
// Block A - Enrollment
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentList {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub enrollments: Vec<Value>,
}

/// Divisions per grade derived from enrollment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DivisionList {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub divisions: Vec<Value>,
}

// ============================================================
// Block C - Workforce
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkforceList {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub staff: Vec<Value>,
}

/// FTE broken down by subject and by contract type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FteSummary {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub fte_by_subject: Vec<Value>,
    pub fte_by_contract: Vec<Value>,
}

// ============================================================
// DHG (Dotation Horaire Globale)
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DhgSummary {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub total_dhg: f64,
    pub dhg_by_grade: Vec<Value>,
    pub he_ratio: f64,
    pub he_benchmark: f64,
    pub efficiency_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DhgCalculation {
    pub status: String,
    pub school_id: Uuid,
    pub scenario_id: Uuid,
}

// ============================================================
// Block D - Financials
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfitLoss {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub fiscal_year: i32,
    pub revenue: BTreeMap<String, f64>,
    pub expenses: BTreeMap<String, f64>,
    pub surplus: f64,
    pub staff_cost_ratio: f64,
}

/// Monthly cash flow. Tuition arrives in Aug/Jan/Apr tranches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlow {
    pub school_id: Uuid,
    pub scenario_id: Uuid,
    pub fiscal_year: i32,
    pub monthly_cashflow: Vec<Value>,
    pub minimum_balance: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl EnrollmentList {
    pub fn empty(query: PlanningQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            enrollments: Vec::new(),
        }
    }
}

impl DivisionList {
    pub fn empty(query: PlanningQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            divisions: Vec::new(),
        }
    }
}

impl WorkforceList {
    pub fn empty(query: PlanningQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            staff: Vec::new(),
        }
    }
}

impl FteSummary {
    pub fn empty(query: PlanningQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            fte_by_subject: Vec::new(),
            fte_by_contract: Vec::new(),
        }
    }
}

impl DhgSummary {
    pub fn empty(query: PlanningQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            total_dhg: 0.0,
            dhg_by_grade: Vec::new(),
            he_ratio: 0.0,
            he_benchmark: HE_BENCHMARK,
            efficiency_status: "unknown".to_string(),
        }
    }
}

impl DhgCalculation {
    pub fn calculated(query: PlanningQuery) -> Self {
        Self {
            status: "calculated".to_string(),
            school_id: query.school_id,
            scenario_id: query.scenario_id,
        }
    }
}

impl ProfitLoss {
    pub fn empty(query: FiscalQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            fiscal_year: query.fiscal_year,
            revenue: BTreeMap::new(),
            expenses: BTreeMap::new(),
            surplus: 0.0,
            staff_cost_ratio: 0.0,
        }
    }
}

impl CashFlow {
    pub fn empty(query: FiscalQuery) -> Self {
        Self {
            school_id: query.school_id,
            scenario_id: query.scenario_id,
            fiscal_year: query.fiscal_year,
            monthly_cashflow: Vec::new(),
            minimum_balance: MINIMUM_CASH_BALANCE,
            currency: CURRENCY.to_string(),
        }
    }
}

impl HealthStatus {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: version.into(),
        }
    }
}
