//! Risk, governance, and strategy annotation
//!
//! Global invariants enforced:
//! - Risk and strategy lookups are total over the closed Diagnosis enumeration
//! - Governance is a constant, independent of any input

use crate::diagnosis::Diagnosis;
use serde::{Deserialize, Serialize};

/// Risk severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }
}

/// Risk classification attached to a diagnosis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RiskProfile {
    pub risk_type: String,
    pub level: RiskLevel,
    pub action: String,
}

/// Standing governance record for executing the decided actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GovernancePolicy {
    pub owner: String,
    pub review_cycle: String,
    pub escalation: String,
}

impl GovernancePolicy {
    /// The standing policy. Constant across all diagnoses and inputs.
    pub fn standard() -> Self {
        GovernancePolicy {
            owner: "Executive Management".to_string(),
            review_cycle: "Weekly".to_string(),
            escalation: "Board if not executed".to_string(),
        }
    }
}

/// Resolve the risk profile for a diagnosis
pub fn risk_profile(diagnosis: Diagnosis) -> RiskProfile {
    match diagnosis {
        Diagnosis::LiquidityProblem => RiskProfile {
            risk_type: "Liquidity risk".to_string(),
            level: RiskLevel::High,
            action: "Secure a short-term credit line before cash reserves are exhausted"
                .to_string(),
        },
        Diagnosis::CollectionProblem => RiskProfile {
            risk_type: "Counterparty default risk".to_string(),
            level: RiskLevel::High,
            action: "Cap exposure per overdue account and enforce stop-ship".to_string(),
        },
        Diagnosis::ProfitabilityProblem => RiskProfile {
            risk_type: "Margin erosion risk".to_string(),
            level: RiskLevel::High,
            action: "Set a cost-reduction target and review it monthly".to_string(),
        },
        Diagnosis::Stable => RiskProfile {
            risk_type: "Baseline operational risk".to_string(),
            level: RiskLevel::Low,
            action: "No immediate action; keep standard controls in place".to_string(),
        },
    }
}

/// Resolve the strategic-impact statements for a diagnosis
pub fn strategic_impact(diagnosis: Diagnosis) -> Vec<String> {
    match diagnosis {
        Diagnosis::LiquidityProblem => vec![
            "Preserving cash takes priority over revenue growth this quarter".to_string(),
            "Credit exposure is reduced until collections normalize".to_string(),
        ],
        Diagnosis::CollectionProblem => vec![
            "Receivables discipline becomes a board-level indicator".to_string(),
            "Sales incentives shift from booked revenue to collected cash".to_string(),
        ],
        Diagnosis::ProfitabilityProblem => vec![
            "The cost structure is rebased before any expansion resumes".to_string(),
            "Low-margin offerings are phased out or repriced".to_string(),
        ],
        Diagnosis::Stable => vec![
            "Current strategy is reaffirmed; surplus funds growth initiatives".to_string(),
            "Credit policy may be loosened selectively to gain share".to_string(),
        ],
    }
}
