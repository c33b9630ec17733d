//! Advisory heuristics
//!
//! Free-standing threshold checks over the raw input, independent of the
//! diagnosis. Any subset may fire; note order follows check order.
//!
//! Global invariants enforced:
//! - Checks are non-exclusive and evaluated in a fixed order
//! - The expense-ratio check is skipped when sales_credit is zero
//! - An empty result is replaced by the single fallback note

use crate::diagnosis::LATE_RATIO_THRESHOLD;
use crate::input::FinancialInput;

/// Expense-to-credit-sales ratio above which the cost structure is flagged
pub const EXPENSE_RATIO_THRESHOLD: f64 = 0.7;

/// Note emitted when no heuristic fires
pub const FALLBACK_NOTE: &str = "Operations stable, continue monitoring";

/// Evaluate the advisory heuristics for one input.
///
/// Checks, in order:
/// 1. late-payer ratio above threshold
/// 2. expenses above 70% of credit sales (skipped when sales_credit == 0)
/// 3. cash collected below expenses paid
/// 4. credit sales below expenses paid
pub fn advisory_notes(input: &FinancialInput) -> Vec<String> {
    let mut notes = Vec::new();

    if input.customers_late_ratio > LATE_RATIO_THRESHOLD {
        notes.push(
            "Enable predictive payment reminders for accounts with a history of late payment"
                .to_string(),
        );
    }

    // Division guard: the ratio is undefined for zero credit sales
    if input.sales_credit != 0.0
        && input.expenses_paid / input.sales_credit > EXPENSE_RATIO_THRESHOLD
    {
        notes.push(
            "Expenses exceed 70% of credit sales; review the expense structure".to_string(),
        );
    }

    if input.cash_collected < input.expenses_paid {
        notes.push(
            "Cash collected does not cover expenses paid; arrange short-term financing"
                .to_string(),
        );
    }

    if input.sales_credit - input.expenses_paid < 0.0 {
        notes.push("Credit sales do not cover expenses; review pricing and revenue mix".to_string());
    }

    if notes.is_empty() {
        notes.push(FALLBACK_NOTE.to_string());
    }

    notes
}
