//! Impact metric derivation from validated input
//!
//! Global invariants enforced:
//! - Pure arithmetic, no rounding or currency rules
//! - Both metrics may be negative

use crate::input::FinancialInput;
use serde::{Deserialize, Serialize};

/// Metrics derived from one validated input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ImpactMetrics {
    /// cash_collected - expenses_paid
    pub cash_flow: f64,
    /// sales_credit - expenses_paid
    pub accounting_profit: f64,
}

/// Derive cash flow and accounting profit
pub fn compute_impact(input: &FinancialInput) -> ImpactMetrics {
    ImpactMetrics {
        cash_flow: input.cash_collected - input.expenses_paid,
        accounting_profit: input.sales_credit - input.expenses_paid,
    }
}
