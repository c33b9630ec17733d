//! Action simulation
//!
//! Produces the textual log an execution-tracking layer would emit. Nothing
//! is actually executed; no external system is touched.
//!
//! Global invariants enforced:
//! - At most one directive confirmation per decision bundle
//! - Supporting-action confirmations preserve action order

use crate::decision::DecisionBundle;

/// Directive key phrases recognized in a primary decision, with the fixed
/// confirmation logged for each. Matching is case-insensitive.
pub const DIRECTIVE_KEY_PHRASES: [(&str, &str); 4] = [
    (
        "stop credit sales",
        "Credit sales channel suspended; new credit orders are blocked",
    ),
    (
        "freeze overdue clients",
        "Overdue client accounts frozen; shipments on hold pending payment",
    ),
    (
        "reduce operating costs",
        "Cost-reduction directive issued to all department heads",
    ),
    (
        "maintain strategy",
        "Current strategy confirmed; no operational changes issued",
    ),
];

/// Produce the simulated execution log for a decision bundle.
///
/// The primary decision contributes at most one confirmation (each entry in
/// the decision table carries exactly one key phrase), followed by one
/// confirmation per supporting action.
pub fn simulate_actions(decision: &DecisionBundle) -> Vec<String> {
    let mut log = Vec::new();

    let primary = decision.primary_decision.to_lowercase();
    if let Some((_, confirmation)) = DIRECTIVE_KEY_PHRASES
        .iter()
        .find(|(phrase, _)| primary.contains(phrase))
    {
        log.push(confirmation.to_string());
    }

    for action in &decision.supporting_actions {
        log.push(format!("Executed digitally: {}", action));
    }

    log
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(primary: &str, actions: &[&str]) -> DecisionBundle {
        DecisionBundle {
            primary_decision: primary.to_string(),
            supporting_actions: actions.iter().map(|a| a.to_string()).collect(),
            improvement_recommendations: Vec::new(),
        }
    }

    #[test]
    fn directive_confirmation_comes_first() {
        let log = simulate_actions(&bundle(
            "Stop credit sales until collections recover",
            &["Accelerate invoicing"],
        ));
        assert_eq!(
            log[0],
            "Credit sales channel suspended; new credit orders are blocked"
        );
        assert_eq!(log[1], "Executed digitally: Accelerate invoicing");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let log = simulate_actions(&bundle("MAINTAIN STRATEGY as agreed", &[]));
        assert_eq!(
            log,
            vec!["Current strategy confirmed; no operational changes issued".to_string()]
        );
    }

    #[test]
    fn unrecognized_directive_logs_only_supporting_actions() {
        let log = simulate_actions(&bundle("Do something else", &["A", "B"]));
        assert_eq!(
            log,
            vec![
                "Executed digitally: A".to_string(),
                "Executed digitally: B".to_string(),
            ]
        );
    }

    #[test]
    fn supporting_action_order_is_preserved() {
        let log = simulate_actions(&bundle(
            "Reduce operating costs across all departments",
            &["First", "Second", "Third"],
        ));
        assert_eq!(log.len(), 4);
        assert_eq!(log[1], "Executed digitally: First");
        assert_eq!(log[3], "Executed digitally: Third");
    }
}
