//! Report assembly and output generation
//!
//! Global invariants enforced:
//! - Deterministic section ordering
//! - Byte-for-byte identical output across runs

use crate::annotations::{GovernancePolicy, RiskProfile};
use crate::decision::DecisionBundle;
use crate::diagnosis::Diagnosis;
use crate::impact::ImpactMetrics;
use crate::input::FinancialInput;
use serde::{Deserialize, Serialize};

/// Complete executive report for one evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ExecutiveReport {
    pub input: FinancialInput,
    pub impact: ImpactMetrics,
    pub diagnosis: Diagnosis,
    pub decision: DecisionBundle,
    pub risk: RiskProfile,
    pub governance: GovernancePolicy,
    pub strategic_impact: Vec<String>,
    pub advisory_notes: Vec<String>,
    pub simulated_actions: Vec<String>,
}

/// Render a report as labeled text panels.
///
/// Section order is fixed; list items keep the order the engine produced.
pub fn render_text(report: &ExecutiveReport) -> String {
    let mut output = String::new();

    output.push_str("INPUT\n");
    output.push_str(&format!(
        "  sales_credit:         {:.2}\n",
        report.input.sales_credit
    ));
    output.push_str(&format!(
        "  cash_collected:       {:.2}\n",
        report.input.cash_collected
    ));
    output.push_str(&format!(
        "  expenses_paid:        {:.2}\n",
        report.input.expenses_paid
    ));
    output.push_str(&format!(
        "  customers_late_ratio: {:.2}\n",
        report.input.customers_late_ratio
    ));

    output.push_str("\nIMPACT\n");
    output.push_str(&format!(
        "  cash_flow:            {:.2}\n",
        report.impact.cash_flow
    ));
    output.push_str(&format!(
        "  accounting_profit:    {:.2}\n",
        report.impact.accounting_profit
    ));

    output.push_str("\nDIAGNOSIS\n");
    output.push_str(&format!("  {}\n", report.diagnosis.label()));

    output.push_str("\nDECISION\n");
    output.push_str(&format!("  {}\n", report.decision.primary_decision));
    push_list(&mut output, "SUPPORTING ACTIONS", &report.decision.supporting_actions);
    push_list(
        &mut output,
        "IMPROVEMENT RECOMMENDATIONS",
        &report.decision.improvement_recommendations,
    );

    output.push_str("\nRISK\n");
    output.push_str(&format!(
        "  {} [{}]: {}\n",
        report.risk.risk_type,
        report.risk.level.as_str(),
        report.risk.action
    ));

    output.push_str("\nGOVERNANCE\n");
    output.push_str(&format!("  owner:        {}\n", report.governance.owner));
    output.push_str(&format!(
        "  review_cycle: {}\n",
        report.governance.review_cycle
    ));
    output.push_str(&format!(
        "  escalation:   {}\n",
        report.governance.escalation
    ));

    push_list(&mut output, "STRATEGIC IMPACT", &report.strategic_impact);
    push_list(&mut output, "ADVISORY NOTES", &report.advisory_notes);
    push_list(&mut output, "SIMULATED TRANSACTIONS", &report.simulated_actions);

    output
}

/// Render a report as JSON output
pub fn render_json(report: &ExecutiveReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn push_list(output: &mut String, header: &str, items: &[String]) {
    output.push('\n');
    output.push_str(header);
    output.push('\n');
    for item in items {
        output.push_str(&format!("  - {}\n", item));
    }
}
