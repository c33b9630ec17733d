//! Integration tests for the full evaluation pipeline

use cashsight_core::{evaluate, render_json, Diagnosis, RawFinancialInput};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> RawFinancialInput {
    let path = fixture_path(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

#[test]
fn liquidity_rule_wins_over_collections() {
    // Profitable on paper, burning cash, and above the late-payer threshold:
    // the liquidity rule fires first.
    let report = evaluate(&load_fixture("liquidity_crunch.json")).unwrap();
    assert_eq!(report.impact.cash_flow, -40_000.0);
    assert_eq!(report.impact.accounting_profit, 40_000.0);
    assert_eq!(report.diagnosis, Diagnosis::LiquidityProblem);
    assert!(report
        .decision
        .primary_decision
        .to_lowercase()
        .contains("stop credit sales"));
}

#[test]
fn late_payers_yield_collection_problem() {
    let report = evaluate(&load_fixture("collections_lag.json")).unwrap();
    assert_eq!(report.diagnosis, Diagnosis::CollectionProblem);
    assert!(report
        .decision
        .primary_decision
        .to_lowercase()
        .contains("freeze overdue clients"));
}

#[test]
fn negative_profit_yields_profitability_problem() {
    let report = evaluate(&load_fixture("margin_squeeze.json")).unwrap();
    assert_eq!(report.impact.cash_flow, -20_000.0);
    assert_eq!(report.impact.accounting_profit, -30_000.0);
    assert_eq!(report.diagnosis, Diagnosis::ProfitabilityProblem);
}

#[test]
fn healthy_input_is_stable() {
    let report = evaluate(&load_fixture("healthy.json")).unwrap();
    assert_eq!(report.impact.cash_flow, 35_000.0);
    assert_eq!(report.impact.accounting_profit, 40_000.0);
    assert_eq!(report.diagnosis, Diagnosis::Stable);
    assert_eq!(
        report.advisory_notes,
        vec!["Operations stable, continue monitoring".to_string()]
    );
}

#[test]
fn missing_field_halts_the_pipeline() {
    let err = evaluate(&load_fixture("missing_field.json")).unwrap_err();
    assert_eq!(err.missing, vec!["sales_credit"]);
}

#[test]
fn identical_input_renders_byte_identical_json() {
    let raw = load_fixture("liquidity_crunch.json");
    let first = render_json(&evaluate(&raw).unwrap());
    let second = render_json(&evaluate(&raw).unwrap());
    assert_eq!(first, second);
}

#[test]
fn simulated_log_covers_directive_and_every_supporting_action() {
    let report = evaluate(&load_fixture("liquidity_crunch.json")).unwrap();
    // One directive confirmation, then one entry per supporting action
    assert_eq!(
        report.simulated_actions.len(),
        1 + report.decision.supporting_actions.len()
    );
    assert_eq!(
        report.simulated_actions[0],
        "Credit sales channel suspended; new credit orders are blocked"
    );
    for (logged, action) in report.simulated_actions[1..]
        .iter()
        .zip(&report.decision.supporting_actions)
    {
        assert_eq!(logged, &format!("Executed digitally: {}", action));
    }
}

#[test]
fn governance_is_identical_across_diagnoses() {
    let healthy = evaluate(&load_fixture("healthy.json")).unwrap();
    let squeezed = evaluate(&load_fixture("margin_squeeze.json")).unwrap();
    assert_eq!(healthy.governance, squeezed.governance);
    assert_eq!(healthy.governance.owner, "Executive Management");
}
