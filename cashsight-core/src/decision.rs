//! Decision resolution
//!
//! Global invariants enforced:
//! - The lookup is total over the closed Diagnosis enumeration
//! - Action list order is fixed by the table, never re-sorted
//! - Each primary decision carries exactly one directive key phrase
//!   recognized by the action simulator

use crate::diagnosis::Diagnosis;
use serde::{Deserialize, Serialize};

/// Primary directive plus supporting and improvement action lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecisionBundle {
    pub primary_decision: String,
    pub supporting_actions: Vec<String>,
    pub improvement_recommendations: Vec<String>,
}

/// Resolve the decision bundle for a diagnosis.
///
/// Fixed four-entry table; no defaults, no partial matches.
pub fn resolve_decision(diagnosis: Diagnosis) -> DecisionBundle {
    match diagnosis {
        Diagnosis::LiquidityProblem => DecisionBundle {
            primary_decision: "Stop credit sales until collections recover".to_string(),
            supporting_actions: vec![
                "Accelerate invoicing for completed work".to_string(),
                "Negotiate extended payment terms with suppliers".to_string(),
                "Offer early-payment discounts on outstanding receivables".to_string(),
            ],
            improvement_recommendations: vec![
                "Introduce rolling 13-week cash flow forecasting".to_string(),
                "Set a minimum cash buffer before extending new credit".to_string(),
            ],
        },
        Diagnosis::CollectionProblem => DecisionBundle {
            primary_decision: "Freeze overdue clients and escalate collection efforts"
                .to_string(),
            supporting_actions: vec![
                "Assign dedicated follow-up to the largest overdue accounts".to_string(),
                "Require deposits from habitual late payers".to_string(),
                "Review credit limits for all active accounts".to_string(),
            ],
            improvement_recommendations: vec![
                "Automate dunning with escalating reminder schedules".to_string(),
                "Tighten credit vetting for new customers".to_string(),
            ],
        },
        Diagnosis::ProfitabilityProblem => DecisionBundle {
            primary_decision: "Reduce operating costs across all departments".to_string(),
            supporting_actions: vec![
                "Renegotiate recurring supplier contracts".to_string(),
                "Defer non-essential spending for one quarter".to_string(),
                "Audit discretionary expense categories".to_string(),
            ],
            improvement_recommendations: vec![
                "Reprice low-margin products and services".to_string(),
                "Shift spend toward the highest-margin lines".to_string(),
            ],
        },
        Diagnosis::Stable => DecisionBundle {
            primary_decision: "Maintain strategy and continue current operations".to_string(),
            supporting_actions: vec![
                "Keep monitoring weekly cash and collection indicators".to_string(),
                "Maintain the current credit policy".to_string(),
            ],
            improvement_recommendations: vec![
                "Invest surplus cash in short-term instruments".to_string(),
                "Expand credit selectively to top-tier customers".to_string(),
            ],
        },
    }
}
