//! Cashsight core library - financial health diagnosis and decision reporting

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Evaluation is strictly per-input
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Rule evaluation order must be explicit
// - Identical input yields byte-for-byte identical output

pub mod advisory;
pub mod annotations;
pub mod decision;
pub mod diagnosis;
pub mod impact;
pub mod input;
pub mod report;
pub mod simulate;

pub use diagnosis::Diagnosis;
pub use input::{FinancialInput, RawFinancialInput, ValidationError};
pub use report::{render_json, render_text, ExecutiveReport};

/// Run the full evaluation pipeline over one raw input.
///
/// Stages, in order:
/// 1. Validation (missing fields halt the pipeline)
/// 2. Impact calculation (cash flow, accounting profit)
/// 3. Diagnosis (ordered rules, first match wins)
/// 4. Decision resolution + risk/governance/strategy annotation (keyed by diagnosis)
/// 5. Advisory heuristics (keyed by raw input, independent of diagnosis)
/// 6. Action simulation (keyed by the decision bundle)
pub fn evaluate(raw: &RawFinancialInput) -> Result<ExecutiveReport, ValidationError> {
    let input = raw.validate()?;
    let impact = impact::compute_impact(&input);
    let diagnosis = diagnosis::diagnose(&impact, input.customers_late_ratio);
    let decision = decision::resolve_decision(diagnosis);
    let risk = annotations::risk_profile(diagnosis);
    let governance = annotations::GovernancePolicy::standard();
    let strategic_impact = annotations::strategic_impact(diagnosis);
    let advisory_notes = advisory::advisory_notes(&input);
    let simulated_actions = simulate::simulate_actions(&decision);

    Ok(ExecutiveReport {
        input,
        impact,
        diagnosis,
        decision,
        risk,
        governance,
        strategic_impact,
        advisory_notes,
        simulated_actions,
    })
}
