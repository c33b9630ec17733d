//! Diagnosis classification
//!
//! Global invariants enforced:
//! - Rule evaluation is ordered and short-circuiting; first match wins
//! - Exactly one diagnosis per evaluation
//! - Thresholds use strict inequalities where declared

use crate::impact::ImpactMetrics;
use serde::{Deserialize, Serialize};

/// Late-payer ratio above which collections are considered a problem.
/// The boundary value itself does not trigger (strict inequality).
pub const LATE_RATIO_THRESHOLD: f64 = 0.4;

/// Financial-health category for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnosis {
    /// Profitable on paper but burning cash - most urgent
    LiquidityProblem,
    /// Too many customers paying late
    CollectionProblem,
    /// Accounting profit is zero or negative
    ProfitabilityProblem,
    /// No rule fired
    Stable,
}

impl Diagnosis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::LiquidityProblem => "liquidity-problem",
            Diagnosis::CollectionProblem => "collection-problem",
            Diagnosis::ProfitabilityProblem => "profitability-problem",
            Diagnosis::Stable => "stable",
        }
    }

    /// Human-readable label for rendered output
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::LiquidityProblem => "Liquidity problem",
            Diagnosis::CollectionProblem => "Collection problem",
            Diagnosis::ProfitabilityProblem => "Profitability problem",
            Diagnosis::Stable => "Stable",
        }
    }
}

/// One ordered diagnostic rule: predicate over the derived metrics and the
/// late-payer ratio, and the diagnosis assigned when it fires.
type Rule = (fn(&ImpactMetrics, f64) -> bool, Diagnosis);

/// Ordered rule table. Position encodes urgency: liquidity beats collections
/// beats profitability. Evaluated top to bottom, first match wins.
const RULES: [Rule; 3] = [
    (
        |m, _| m.accounting_profit > 0.0 && m.cash_flow < 0.0,
        Diagnosis::LiquidityProblem,
    ),
    (
        |_, late_ratio| late_ratio > LATE_RATIO_THRESHOLD,
        Diagnosis::CollectionProblem,
    ),
    (
        // Zero profit is a profitability problem, not stable
        |m, _| m.accounting_profit <= 0.0,
        Diagnosis::ProfitabilityProblem,
    ),
];

/// Classify one evaluation.
///
/// Walks the ordered rule table and returns the first firing diagnosis;
/// falls through to `Stable` when no rule fires.
pub fn diagnose(impact: &ImpactMetrics, customers_late_ratio: f64) -> Diagnosis {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(impact, customers_late_ratio))
        .map(|&(_, diagnosis)| diagnosis)
        .unwrap_or(Diagnosis::Stable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(cash_flow: f64, accounting_profit: f64) -> ImpactMetrics {
        ImpactMetrics {
            cash_flow,
            accounting_profit,
        }
    }

    #[test]
    fn liquidity_wins_over_collections() {
        // Profitable on paper, negative cash, AND too many late payers:
        // rule order makes liquidity the diagnosis.
        let d = diagnose(&impact(-40_000.0, 40_000.0), 0.45);
        assert_eq!(d, Diagnosis::LiquidityProblem);
    }

    #[test]
    fn late_ratio_triggers_collections() {
        let d = diagnose(&impact(10_000.0, 20_000.0), 0.41);
        assert_eq!(d, Diagnosis::CollectionProblem);
    }

    #[test]
    fn late_ratio_boundary_does_not_trigger() {
        let d = diagnose(&impact(10_000.0, 20_000.0), 0.4);
        assert_eq!(d, Diagnosis::Stable);
    }

    #[test]
    fn negative_profit_is_profitability_problem() {
        // profit <= 0 means rule 1 cannot apply even with negative cash flow
        let d = diagnose(&impact(-20_000.0, -30_000.0), 0.10);
        assert_eq!(d, Diagnosis::ProfitabilityProblem);
    }

    #[test]
    fn zero_profit_is_profitability_problem_not_stable() {
        let d = diagnose(&impact(5_000.0, 0.0), 0.0);
        assert_eq!(d, Diagnosis::ProfitabilityProblem);
    }

    #[test]
    fn healthy_input_is_stable() {
        let d = diagnose(&impact(35_000.0, 40_000.0), 0.05);
        assert_eq!(d, Diagnosis::Stable);
    }

    #[test]
    fn zero_cash_flow_with_profit_is_not_liquidity() {
        // Rule 1 requires strictly negative cash flow
        let d = diagnose(&impact(0.0, 10_000.0), 0.0);
        assert_eq!(d, Diagnosis::Stable);
    }
}
