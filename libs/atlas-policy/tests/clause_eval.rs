//! Integration tests for clause evaluation
//!
//! Drives the operand surface the way the clause parser and placement
//! planner do: token selection, priority ordering, match/delta/render.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use atlas_policy::{Operand, TestStatus, ANY};
use serde_json::{json, Value};

/// Token selection as the clause parser performs it
#[test]
fn token_selection_covers_rule_notation() {
    // A clause with no leading symbol is an equality clause
    assert_eq!(Operand::for_token(""), Some(Operand::Equal));
    assert_eq!(Operand::for_token(ANY), Some(Operand::Wildcard));
    assert_eq!(Operand::for_token(">"), Some(Operand::GreaterThan));
    assert_eq!(Operand::for_token("<"), Some(Operand::LessThan));
    assert_eq!(Operand::for_token("!"), Some(Operand::NotEqual));

    // Unknown notation is the parser's problem, not a silent Equal
    assert_eq!(Operand::for_token(">="), None);
    assert_eq!(Operand::for_token("~"), None);
}

/// Candidate clauses sort from most to least specific, ties stable
#[test]
fn priority_sort_is_stable_most_specific_first() {
    // Simulated clauses for one attribute, in declaration order
    let mut clauses = vec![
        ("free_disk<10", Operand::LessThan),
        ("replicas", Operand::Equal),
        ("free_disk!0", Operand::NotEqual),
        ("any*", Operand::Wildcard),
        ("cores>2", Operand::GreaterThan),
    ];

    clauses.sort_by_key(|(_, op)| op.priority());

    let order: Vec<&str> = clauses.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        order,
        vec!["replicas", "cores>2", "free_disk<10", "free_disk!0", "any*"]
    );
}

/// One attribute evaluated across all five operand kinds
#[test]
fn match_over_observed_node_attributes() {
    let observed = json!(4); // e.g. cores seen on the node

    assert_eq!(
        Operand::Equal.matches(&json!(4), &observed).unwrap(),
        TestStatus::Pass
    );
    assert_eq!(
        Operand::NotEqual.matches(&json!(4), &observed).unwrap(),
        TestStatus::Fail
    );
    assert_eq!(
        Operand::GreaterThan.matches(&json!(2), &observed).unwrap(),
        TestStatus::Pass
    );
    assert_eq!(
        Operand::LessThan.matches(&json!(2), &observed).unwrap(),
        TestStatus::Fail
    );
    assert_eq!(
        Operand::Wildcard.matches(&json!(ANY), &observed).unwrap(),
        TestStatus::Pass
    );
}

/// Absent attributes skip comparison clauses instead of failing them
#[test]
fn absent_attribute_is_not_a_violation() {
    for op in [Operand::Wildcard, Operand::GreaterThan, Operand::LessThan] {
        assert_eq!(
            op.matches(&json!(3), &Value::Null).unwrap(),
            TestStatus::NotApplicable,
            "{op:?} must skip absent attributes"
        );
    }
}

/// Delta ranks violations for the remediation planner
#[test]
fn delta_drives_remediation_ranking() {
    // Node must hold more than 5 replicas, currently holds 3:
    // minimum shift to comply is 3 (to reach 6)
    assert_eq!(Operand::GreaterThan.delta(&json!(5), &json!(3)), Some(3));

    // Node must hold fewer than 5, currently holds 7: signed overshoot
    assert_eq!(Operand::LessThan.delta(&json!(5), &json!(7)), Some(-2));

    // Already compliant on both sides
    assert_eq!(Operand::GreaterThan.delta(&json!(5), &json!(6)), Some(0));
    assert_eq!(Operand::LessThan.delta(&json!(5), &json!(3)), Some(0));

    // String-typed counts still coerce
    assert_eq!(Operand::Equal.delta(&json!("5"), &json!("3")), Some(2));

    // Non-numeric clause types produce no delta rather than an error
    assert_eq!(Operand::Equal.delta(&json!("ssd"), &json!("hdd")), None);
}

/// render_rule reproduces the clause's original notation
#[test]
fn render_reproduces_clause_notation() {
    assert_eq!(Operand::GreaterThan.render_rule(&json!(2)), ">2");
    assert_eq!(Operand::LessThan.render_rule(&json!("10%")), "<10%");
    assert_eq!(Operand::NotEqual.render_rule(&json!("us-east")), "!us-east");
    assert_eq!(Operand::Equal.render_rule(&json!(3)), "3");
}

/// Statuses serialize as snake_case strings for the API boundary
#[test]
fn status_and_operand_serde_round_trip() {
    let s = serde_json::to_string(&TestStatus::NotApplicable).unwrap();
    assert_eq!(s, "\"not_applicable\"");
    let back: TestStatus = serde_json::from_str(&s).unwrap();
    assert_eq!(back, TestStatus::NotApplicable);

    let s = serde_json::to_string(&Operand::GreaterThan).unwrap();
    assert_eq!(s, "\"greater_than\"");
    let back: Operand = serde_json::from_str(&s).unwrap();
    assert_eq!(back, Operand::GreaterThan);
}
